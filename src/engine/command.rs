//! The widget's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a pointer gesture, a
//! key press, or a programmatic call, is a `GlobeCommand`. Consumers build
//! commands (usually via [`InputProcessor`](crate::input::InputProcessor))
//! and pass them to [`GlobeWidget::execute`](super::GlobeWidget::execute).

use glam::Vec2;

/// Operations understood by [`GlobeWidget::execute`](super::GlobeWidget::execute).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlobeCommand {
    // ── Pointer ─────────────────────────────────────────────────────
    /// Pointer rests over the surface without a button held; restarts the
    /// hover debounce.
    Hover {
        /// Pointer position in pixels.
        pointer: Vec2,
    },

    /// Primary button pressed; anchors a rotate drag.
    BeginDrag {
        /// Pointer position in pixels.
        pointer: Vec2,
    },

    /// Pointer moved with the button held; rotates and clears focus.
    Drag {
        /// Pointer position in pixels.
        pointer: Vec2,
    },

    /// Button released after a drag.
    EndDrag,

    /// Button pressed and released in place; opens the focused point.
    Click,

    /// Pointer left the surface.
    PointerLeft,

    // ── Camera ──────────────────────────────────────────────────────
    /// Move the camera closer by `delta` (negative moves away).
    Zoom {
        /// Distance to move.
        delta: f32,
    },

    /// Turn the yaw target by `-delta` radians.
    Rotate {
        /// Radians to turn.
        delta: f32,
    },

    /// Flip idle auto-rotation.
    ToggleAutoRotate,

    // ── Surface ─────────────────────────────────────────────────────
    /// Surface changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}
