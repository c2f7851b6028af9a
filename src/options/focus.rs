use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Focus", inline)]
#[serde(default)]
/// Highlight transition and focus ring parameters.
pub struct FocusOptions {
    /// Duration of enter and exit transitions.
    #[schemars(title = "Transition (ms)", range(min = 0, max = 2000))]
    pub transition_ms: u64,
    /// Curve used when a point gains focus.
    #[schemars(title = "Enter Easing")]
    pub enter_easing: EasingFunction,
    /// Curve used when a point loses focus.
    #[schemars(title = "Exit Easing")]
    pub exit_easing: EasingFunction,
    /// Marker scale of the focused point.
    #[schemars(title = "Focused Scale", range(min = 1.0, max = 4.0), extend("step" = 0.1))]
    pub focused_point_scale: f32,
    /// Show pulsing rings around the focused point.
    #[schemars(title = "Focus Rings")]
    pub rings: bool,
    /// Number of concentric rings.
    #[schemars(skip)]
    pub ring_count: usize,
    /// Milliseconds between ring pulse steps.
    #[schemars(skip)]
    pub ring_pulse_interval_ms: u64,
    /// Pulse phase wraps after this many steps.
    #[schemars(skip)]
    pub ring_pulse_steps: u32,
    /// Radius offset between consecutive rings.
    #[schemars(skip)]
    pub ring_spacing: f32,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            transition_ms: 200,
            enter_easing: EasingFunction::CubicIn,
            exit_easing: EasingFunction::CubicOut,
            focused_point_scale: 2.0,
            rings: true,
            ring_count: 3,
            ring_pulse_interval_ms: 120,
            ring_pulse_steps: 12,
            ring_spacing: 3.0,
        }
    }
}
