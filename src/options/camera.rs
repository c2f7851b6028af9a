use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Closest allowed distance from the globe center.
    #[schemars(title = "Min Distance", range(min = 210.0, max = 2000.0), extend("step" = 10.0))]
    pub min_zoom: f32,
    /// Farthest allowed distance from the globe center.
    #[schemars(title = "Max Distance", range(min = 210.0, max = 5000.0), extend("step" = 10.0))]
    pub max_zoom: f32,
    /// Starting distance; clamped into the zoom range.
    #[schemars(skip)]
    pub initial_distance: f32,
    /// Starting yaw target (radians).
    #[schemars(skip)]
    pub initial_yaw: f32,
    /// Starting pitch target (radians).
    #[schemars(skip)]
    pub initial_pitch: f32,
    /// Radians of rotation per pixel of drag at the damping distance.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Distance at which drag sensitivity equals `rotate_speed`.
    #[schemars(skip)]
    pub zoom_damp_distance: f32,
    /// Fraction of the remaining yaw/pitch gap closed per tick.
    #[schemars(title = "Rotation Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub rotation_smoothing: f32,
    /// Fraction of the remaining zoom gap closed per tick.
    #[schemars(title = "Zoom Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_smoothing: f32,
    /// Whether the globe spins while idle.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Milliseconds between idle-spin nudges.
    #[schemars(skip)]
    pub auto_rotate_interval_ms: u64,
    /// Radians per idle-spin nudge.
    #[schemars(skip)]
    pub auto_rotate_step: f32,
    /// Zoom distance per unit of wheel delta.
    #[schemars(title = "Wheel Zoom", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub wheel_zoom_scale: f32,
    /// Zoom distance per zoom key press.
    #[schemars(skip)]
    pub key_zoom_step: f32,
    /// Yaw radians per rotate key press.
    #[schemars(skip)]
    pub key_rotate_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 30.0,
            znear: 1.0,
            zfar: 20000.0,
            min_zoom: 350.0,
            max_zoom: 1000.0,
            initial_distance: 1000.0,
            initial_yaw: 0.5,
            initial_pitch: std::f32::consts::FRAC_PI_6,
            rotate_speed: 0.005,
            zoom_damp_distance: 1000.0,
            rotation_smoothing: 0.1,
            zoom_smoothing: 0.3,
            auto_rotate: true,
            auto_rotate_interval_ms: 100,
            auto_rotate_step: 0.0005,
            wheel_zoom_scale: 0.3,
            key_zoom_step: 100.0,
            key_rotate_step: 1.0,
        }
    }
}
