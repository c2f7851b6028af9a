//! Input handling: event types, the pointer state machine, and the input
//! processor that converts raw events into widget commands.

/// Platform-agnostic input events.
pub mod event;
/// Pointer tracking and press/drag/click state machine.
pub(crate) mod mouse;
/// Converts raw events into widget commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
