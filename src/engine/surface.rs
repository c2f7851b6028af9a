//! The seam between the widget and whatever draws it.

use glam::Mat4;

use crate::camera::Camera;
use crate::focus::{FocusState, RingState};
use crate::scene::{Placement, PointId, PointVisual, SceneLayer};

/// Host collaborator that owns the actual rendering surface.
///
/// The widget never draws. It calls [`render`](Self::render) once per tick
/// with everything needed to draw the frame, toggles decorative layers, and
/// asks the host to open resources when a focused point is clicked.
pub trait RenderSurface {
    /// Current surface size in pixels.
    fn size(&self) -> (u32, u32);

    /// Draw one frame.
    fn render(&mut self, frame: &FrameState<'_>);

    /// Show or hide a decorative layer.
    fn set_layer_visible(&mut self, layer: SceneLayer, visible: bool);

    /// Open the resource behind a clicked point.
    fn open_resource(&mut self, locator: &str);
}

/// Animated state of one point for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointFrame {
    /// Registry index.
    pub id: PointId,
    /// Marker scale.
    pub point_scale: f32,
    /// Label scale.
    pub label_scale: f32,
    /// Whether the label is drawn.
    pub label_visible: bool,
}

/// Focus rings for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingsFrame<'a> {
    /// Placement of the focused marker the rings surround.
    pub anchor: Placement,
    /// Per-ring radius and scale, innermost first.
    pub rings: &'a [RingState],
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone)]
pub struct FrameState<'a> {
    /// Camera after this tick's smoothing.
    pub camera: &'a Camera,
    /// Combined view-projection matrix of `camera`.
    pub view_proj: Mat4,
    /// Static per-point visuals, indexed by [`PointId`].
    pub visuals: &'a [PointVisual],
    /// Animated per-point state, parallel to `visuals`.
    pub points: Vec<PointFrame>,
    /// Current focus.
    pub focus: FocusState,
    /// Focus rings, when a point is focused and rings are enabled.
    pub rings: Option<RingsFrame<'a>>,
    /// Whether the starfield layer is shown.
    pub starfield: bool,
    /// Whether the atmosphere layer is shown.
    pub atmosphere: bool,
}
