use glam::Vec2;

/// Pointer travel (pixels) beyond which a press becomes a drag.
const DRAG_THRESHOLD: f32 = 1.0;

/// Result of releasing the primary button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// Button was not held (release without a matching press).
    NoAction,
    /// Press and release with no meaningful travel.
    Click,
    /// The press turned into a drag.
    DragEnd,
}

/// Tracks pointer position, hover, and the press/drag state machine.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pub position: Option<Vec2>,
    pub over_surface: bool,
    press_origin: Option<Vec2>,
    dragged: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new pointer position and return the previous one.
    pub fn move_to(&mut self, pointer: Vec2) -> Option<Vec2> {
        self.over_surface = true;
        let previous = self.position.replace(pointer);
        if let Some(origin) = self.press_origin {
            if origin.distance(pointer) > DRAG_THRESHOLD {
                self.dragged = true;
            }
        }
        previous
    }

    /// Primary button went down at the current position.
    pub fn press(&mut self) -> Option<Vec2> {
        let at = self.position?;
        self.press_origin = Some(at);
        self.dragged = false;
        Some(at)
    }

    pub fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Whether the current press has travelled past the drag threshold.
    pub fn is_dragging(&self) -> bool {
        self.press_origin.is_some() && self.dragged
    }

    /// Primary button went up.
    pub fn release(&mut self) -> ClickResult {
        let Some(_) = self.press_origin.take() else {
            return ClickResult::NoAction;
        };
        if std::mem::take(&mut self.dragged) {
            ClickResult::DragEnd
        } else {
            ClickResult::Click
        }
    }

    /// Pointer left the surface: any press is abandoned.
    pub fn leave(&mut self) {
        self.over_surface = false;
        self.press_origin = None;
        self.dragged = false;
    }
}
