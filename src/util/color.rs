//! Point weight → RGB color mapping.
//!
//! Three modes:
//! - **Hue** (default): the weight is used directly as an HSL hue with full
//!   saturation and half lightness.
//! - **Heat**: hue `0.6 - 0.5·w`, sweeping blue (low) toward red (high).
//! - **Ramp**: interpolate a [`ColorRamp`] of evenly spaced stops.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Caller-supplied weight → color function.
pub type ColorFn = Box<dyn Fn(f32) -> [f32; 3]>;

/// A color ramp defined by N evenly-spaced color stops.
/// `t = 0` maps to the first color, `t = 1` maps to the last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorRamp {
    stops: Vec<[f32; 3]>,
}

impl ColorRamp {
    /// Build a ramp from explicit stops. Fewer than two stops degrade to a
    /// constant color (white for an empty ramp).
    #[must_use]
    pub fn new(stops: Vec<[f32; 3]>) -> Self {
        Self { stops }
    }

    /// Interpolate the ramp at position `t` in [0, 1].
    #[must_use]
    pub fn sample(&self, t: f32) -> [f32; 3] {
        match self.stops.len() {
            0 => return [1.0; 3],
            1 => return self.stops[0],
            _ => {}
        }
        let t = t.clamp(0.0, 1.0);
        let n = self.stops.len() - 1;
        let scaled = t * n as f32;
        let idx = (scaled as usize).min(n - 1);
        let frac = scaled - idx as f32;

        let a = &self.stops[idx];
        let b = &self.stops[idx + 1];
        [
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        ]
    }
}

impl Default for ColorRamp {
    /// Blue → Cyan → Yellow → Red
    fn default() -> Self {
        Self {
            stops: vec![
                [0.1, 0.2, 0.9],
                [0.1, 0.8, 0.9],
                [1.0, 0.9, 0.1],
                [0.9, 0.15, 0.1],
            ],
        }
    }
}

/// How point weights are turned into colors.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Weight is the HSL hue.
    #[default]
    Hue,
    /// Weight sweeps the hue from blue toward red.
    Heat,
    /// Weight samples the configured ramp.
    Ramp(ColorRamp),
}

impl ColorMode {
    /// Map a point weight to an RGB color.
    #[must_use]
    pub fn color(&self, weight: f32) -> [f32; 3] {
        match self {
            Self::Hue => hsl_to_rgb(weight, 1.0, 0.5),
            Self::Heat => hsl_to_rgb(0.6 - weight * 0.5, 1.0, 0.5),
            Self::Ramp(ramp) => ramp.sample(weight),
        }
    }
}

/// Convert HSL (all components in [0, 1]; hue wraps) to linear RGB.
#[must_use]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l; 3];
    }
    let q = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}
