//! Per-point enter/exit highlight transitions.

use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Scales a point is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightVisual {
    /// Marker scale (1 at rest).
    pub point_scale: f32,
    /// Label scale (0 at rest).
    pub label_scale: f32,
}

impl HighlightVisual {
    /// Resting visual of an unfocused point.
    pub const REST: Self = Self {
        point_scale: 1.0,
        label_scale: 0.0,
    };

    fn lerp(&self, target: &Self, t: f32) -> Self {
        Self {
            point_scale: self.point_scale
                + (target.point_scale - self.point_scale) * t,
            label_scale: self.label_scale
                + (target.label_scale - self.label_scale) * t,
        }
    }
}

/// Direction of a running transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Growing toward the focused visual.
    Enter,
    /// Shrinking back to rest.
    Exit,
}

/// A running interpolation between two visuals.
#[derive(Debug, Clone)]
struct HighlightTransition {
    kind: TransitionKind,
    start: HighlightVisual,
    target: HighlightVisual,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFunction,
}

impl HighlightTransition {
    /// Normalized progress (0.0 to 1.0).
    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }
}

/// Animated highlight state of one point.
///
/// A new transition always starts from the current visual, so an exit that
/// interrupts an enter reverses smoothly instead of jumping.
#[derive(Debug, Clone)]
pub struct Highlight {
    current: HighlightVisual,
    label_visible: bool,
    transition: Option<HighlightTransition>,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            current: HighlightVisual::REST,
            label_visible: false,
            transition: None,
        }
    }
}

impl Highlight {
    /// Current scales.
    #[must_use]
    pub fn visual(&self) -> HighlightVisual {
        self.current
    }

    /// Whether the label should be drawn.
    #[must_use]
    pub fn label_visible(&self) -> bool {
        self.label_visible
    }

    /// Direction of the running transition, if any.
    #[must_use]
    pub fn animating(&self) -> Option<TransitionKind> {
        self.transition.as_ref().map(|t| t.kind)
    }

    /// Start growing toward `target`. The label shows immediately.
    pub fn enter(
        &mut self,
        target: HighlightVisual,
        duration: Duration,
        easing: EasingFunction,
    ) {
        self.label_visible = true;
        self.begin(TransitionKind::Enter, target, duration, easing);
    }

    /// Start shrinking back to rest. The label hides once this completes.
    pub fn exit(&mut self, duration: Duration, easing: EasingFunction) {
        self.begin(TransitionKind::Exit, HighlightVisual::REST, duration, easing);
    }

    fn begin(
        &mut self,
        kind: TransitionKind,
        target: HighlightVisual,
        duration: Duration,
        easing: EasingFunction,
    ) {
        self.transition = Some(HighlightTransition {
            kind,
            start: self.current,
            target,
            elapsed: Duration::ZERO,
            duration,
            easing,
        });
        // A zero-length transition lands immediately.
        self.advance(Duration::ZERO);
    }

    /// Advance the running transition by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        transition.elapsed += dt;
        let t = transition.progress();
        self.current = transition
            .start
            .lerp(&transition.target, transition.easing.evaluate(t));
        if t >= 1.0 {
            self.current = transition.target;
            if transition.kind == TransitionKind::Exit {
                self.label_visible = false;
            }
            self.transition = None;
        }
    }
}
