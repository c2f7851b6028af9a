//! Converts raw platform events into widget commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! drag detection, hover) and the key-binding map. It is the only thing
//! that sits between raw events and
//! [`GlobeWidget::execute`](crate::engine::GlobeWidget::execute).

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::mouse::{ClickResult, PointerState};
use crate::engine::GlobeCommand;
use crate::options::CameraOptions;

/// Maps key strings to [`KeyCommandTag`] variants.
///
/// Key strings follow the DOM `KeyboardEvent.code` names: `"ArrowUp"`,
/// `"KeyR"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the key-bindable subset of [`GlobeCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Move the camera in by one key step.
    ZoomIn,
    /// Move the camera out by one key step.
    ZoomOut,
    /// Turn the globe left by one key step.
    RotateLeft,
    /// Turn the globe right by one key step.
    RotateRight,
    /// Toggle idle auto-rotation.
    ToggleAutoRotate,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowUp".into(), KeyCommandTag::ZoomIn),
            ("ArrowDown".into(), KeyCommandTag::ZoomOut),
            ("ArrowLeft".into(), KeyCommandTag::RotateLeft),
            ("ArrowRight".into(), KeyCommandTag::RotateRight),
            ("KeyR".into(), KeyCommandTag::ToggleAutoRotate),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the tag bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyCommandTag> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: &str) {
        let _ = self.bindings.remove(key);
    }
}

/// Step sizes applied when turning input into camera commands.
#[derive(Debug, Clone, Copy, PartialEq)]
struct InputScales {
    wheel_zoom: f32,
    key_zoom: f32,
    key_rotate: f32,
}

impl From<&CameraOptions> for InputScales {
    fn from(options: &CameraOptions) -> Self {
        Self {
            wheel_zoom: options.wheel_zoom_scale,
            key_zoom: options.key_zoom_step,
            key_rotate: options.key_rotate_step,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw events into [`GlobeCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(event) {
///     widget.execute(cmd);
/// }
/// if let Some(cmd) = processor.handle_key_press("ArrowUp") {
///     widget.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Pointer tracking and press/drag state machine.
    pointer: PointerState,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
    scales: InputScales,
}

impl InputProcessor {
    /// Create a processor with the camera's step sizes and the given key
    /// bindings.
    #[must_use]
    pub fn new(camera: &CameraOptions, key_bindings: KeyBindings) -> Self {
        Self {
            pointer: PointerState::new(),
            key_bindings,
            scales: InputScales::from(camera),
        }
    }

    /// Last known pointer position in pixels.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer.position
    }

    /// Whether the pointer is over the surface.
    #[must_use]
    pub fn over_surface(&self) -> bool {
        self.pointer.over_surface
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pointer.is_pressed()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<GlobeCommand> {
        let s = self.scales;
        self.key_bindings.lookup(key).map(|tag| match tag {
            KeyCommandTag::ZoomIn => GlobeCommand::Zoom { delta: s.key_zoom },
            KeyCommandTag::ZoomOut => GlobeCommand::Zoom {
                delta: -s.key_zoom,
            },
            KeyCommandTag::RotateLeft => GlobeCommand::Rotate {
                delta: s.key_rotate,
            },
            KeyCommandTag::RotateRight => GlobeCommand::Rotate {
                delta: -s.key_rotate,
            },
            KeyCommandTag::ToggleAutoRotate => GlobeCommand::ToggleAutoRotate,
        })
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<GlobeCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                // Wheel only zooms while the pointer is over the globe view.
                (self.pointer.over_surface && delta.is_finite()).then(|| {
                    GlobeCommand::Zoom {
                        delta: delta * self.scales.wheel_zoom,
                    }
                })
            }
            InputEvent::CursorLeft => {
                self.pointer.leave();
                Some(GlobeCommand::PointerLeft)
            }
            InputEvent::CursorEntered => {
                self.pointer.over_surface = true;
                None
            }
            InputEvent::Resized { width, height } => {
                Some(GlobeCommand::Resize { width, height })
            }
        }
    }

    /// Cursor moved: hover when idle, drag once a held press has travelled
    /// past the drag threshold. Jitter below it keeps the press a click.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<GlobeCommand> {
        let pointer = Vec2::new(x, y);
        if !pointer.is_finite() {
            return None;
        }
        let previous = self.pointer.move_to(pointer);

        if self.pointer.is_pressed() {
            if previous == Some(pointer) || !self.pointer.is_dragging() {
                return None;
            }
            return Some(GlobeCommand::Drag { pointer });
        }
        Some(GlobeCommand::Hover { pointer })
    }

    /// Primary button press/release: anchor drags, detect clicks.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<GlobeCommand> {
        if button != MouseButton::Left {
            return None;
        }

        if pressed {
            return self
                .pointer
                .press()
                .map(|pointer| GlobeCommand::BeginDrag { pointer });
        }

        match self.pointer.release() {
            ClickResult::NoAction => None,
            ClickResult::Click => Some(GlobeCommand::Click),
            ClickResult::DragEnd => Some(GlobeCommand::EndDrag),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(&CameraOptions::default(), KeyBindings::default())
    }
}
