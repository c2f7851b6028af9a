//! Shared utilities.
//!
//! Tick-driven timers, frame timing, easing curves, and weight-to-color
//! mapping.

pub mod color;
pub mod easing;
pub mod frame_timing;
pub mod timer;
