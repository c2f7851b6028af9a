//! Hover focus: which point is highlighted and how it animates.
//!
//! The controller owns the hover debounce, one [`Highlight`] per registered
//! point, and the [`FocusRings`]. It does not pick; when the debounce fires
//! it hands the pointer position back to the widget, which resolves it to a
//! point (or nothing) and calls [`FocusController::set_focus`].

mod highlight;
mod rings;

pub use highlight::{Highlight, HighlightVisual, TransitionKind};
pub use rings::{FocusRings, RingState};
use glam::Vec2;
use web_time::Duration;

use crate::options::FocusOptions;
use crate::scene::PointId;
use crate::util::easing::EasingFunction;
use crate::util::timer::Countdown;

/// Which point, if any, has hover focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// No point is focused.
    #[default]
    Idle,
    /// The given point is focused.
    Focused(PointId),
}

impl FocusState {
    /// The focused point, if any.
    #[must_use]
    pub fn active(&self) -> Option<PointId> {
        match self {
            Self::Idle => None,
            Self::Focused(id) => Some(*id),
        }
    }
}

impl From<Option<PointId>> for FocusState {
    fn from(id: Option<PointId>) -> Self {
        id.map_or(Self::Idle, Self::Focused)
    }
}

/// Hover debounce, focus state, and highlight animation.
#[derive(Debug, Clone)]
pub struct FocusController {
    state: FocusState,
    debounce: Countdown,
    debounce_delay: Duration,
    pending_pointer: Option<Vec2>,
    highlights: Vec<Highlight>,
    rings: FocusRings,

    focused_visual: HighlightVisual,
    transition: Duration,
    enter_easing: EasingFunction,
    exit_easing: EasingFunction,
}

impl FocusController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(options: &FocusOptions, hover_debounce: Duration) -> Self {
        Self {
            state: FocusState::Idle,
            debounce: Countdown::new(),
            debounce_delay: hover_debounce,
            pending_pointer: None,
            highlights: Vec::new(),
            rings: FocusRings::new(options),
            focused_visual: HighlightVisual {
                point_scale: options.focused_point_scale,
                label_scale: 1.0,
            },
            transition: Duration::from_millis(options.transition_ms),
            enter_easing: options.enter_easing,
            exit_easing: options.exit_easing,
        }
    }

    /// Current focus.
    #[must_use]
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Highlight of point `id`, if registered.
    #[must_use]
    pub fn highlight(&self, id: PointId) -> Option<&Highlight> {
        self.highlights.get(id)
    }

    /// Highlights for all registered points, indexed by [`PointId`].
    #[must_use]
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Focus rings.
    #[must_use]
    pub fn rings(&self) -> &FocusRings {
        &self.rings
    }

    /// Make room for `count` points. New points start at rest.
    pub fn register_points(&mut self, count: usize) {
        if count > self.highlights.len() {
            self.highlights.resize_with(count, Highlight::default);
        }
    }

    // ── Debounce ─────────────────────────────────────────────────────────

    /// Pointer moved without a drag: (re)start the hover debounce.
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        self.pending_pointer = Some(pointer);
        self.debounce.start(self.debounce_delay);
    }

    /// Whether a hover pick is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Drop any scheduled hover pick.
    pub fn cancel_pending(&mut self) {
        self.debounce.cancel();
        self.pending_pointer = None;
    }

    /// Advance the debounce. Returns the pointer position to resolve when
    /// the pointer has rested long enough.
    pub fn poll_debounce(&mut self, dt: Duration) -> Option<Vec2> {
        if self.debounce.advance(dt) {
            self.pending_pointer.take()
        } else {
            None
        }
    }

    // ── Focus ────────────────────────────────────────────────────────────

    /// Move focus to `target`. Returns `true` if the focus changed.
    ///
    /// The previous point exits and the new point enters; re-focusing the
    /// active point is a no-op. Ids with no registered highlight are
    /// treated as `None`.
    pub fn set_focus(&mut self, target: Option<PointId>) -> bool {
        let target = target.filter(|&id| id < self.highlights.len());
        if target == self.state.active() {
            return false;
        }

        if let Some(old) = self.state.active() {
            if let Some(h) = self.highlights.get_mut(old) {
                h.exit(self.transition, self.exit_easing);
            }
            log::debug!("focus exit: point {old}");
        }

        match target {
            Some(id) => {
                if let Some(h) = self.highlights.get_mut(id) {
                    h.enter(self.focused_visual, self.transition, self.enter_easing);
                }
                self.rings.show(id);
                log::debug!("focus enter: point {id}");
            }
            None => self.rings.clear(),
        }

        self.state = FocusState::from(target);
        true
    }

    /// Clear focus immediately (drag, pointer leave).
    pub fn clear(&mut self) -> bool {
        self.set_focus(None)
    }

    // ── Per-frame ────────────────────────────────────────────────────────

    /// Advance highlight transitions and the ring pulse.
    pub fn advance(&mut self, dt: Duration) {
        for h in &mut self.highlights {
            h.advance(dt);
        }
        self.rings.advance(dt);
    }

    /// Whether any highlight is still animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.highlights.iter().any(|h| h.animating().is_some())
    }

    /// Cancel the debounce and the ring pulse.
    pub fn cancel_timers(&mut self) {
        self.cancel_pending();
        self.rings.cancel_timers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn controller(points: usize) -> FocusController {
        let mut c = FocusController::new(&FocusOptions::default(), 200 * MS);
        c.register_points(points);
        c
    }

    #[test]
    fn debounce_fires_only_for_last_move() {
        let mut c = controller(1);
        c.pointer_moved(Vec2::new(1.0, 1.0));
        assert_eq!(c.poll_debounce(50 * MS), None);
        c.pointer_moved(Vec2::new(2.0, 2.0));
        assert_eq!(c.poll_debounce(150 * MS), None);
        assert_eq!(c.poll_debounce(50 * MS), Some(Vec2::new(2.0, 2.0)));
        assert_eq!(c.poll_debounce(500 * MS), None);
    }

    #[test]
    fn cancelled_debounce_never_fires() {
        let mut c = controller(1);
        c.pointer_moved(Vec2::ONE);
        c.cancel_pending();
        c.cancel_pending();
        assert_eq!(c.poll_debounce(Duration::from_secs(1)), None);
    }

    #[test]
    fn switching_focus_exits_old_and_enters_new() {
        let mut c = controller(3);
        assert!(c.set_focus(Some(1)));
        c.advance(200 * MS);
        assert_eq!(c.state(), FocusState::Focused(1));
        assert_eq!(c.highlight(1).unwrap().visual().point_scale, 2.0);

        assert!(c.set_focus(Some(2)));
        assert_eq!(c.highlight(1).unwrap().animating(), Some(TransitionKind::Exit));
        assert_eq!(c.highlight(2).unwrap().animating(), Some(TransitionKind::Enter));
        assert_eq!(c.rings().anchor(), Some(2));

        c.advance(200 * MS);
        assert!(!c.is_animating());
        assert!(!c.highlight(1).unwrap().label_visible());
        assert!(c.highlight(2).unwrap().label_visible());
    }

    #[test]
    fn refocusing_same_point_is_noop() {
        let mut c = controller(2);
        assert!(c.set_focus(Some(0)));
        c.advance(200 * MS);
        assert!(!c.set_focus(Some(0)));
        assert!(!c.is_animating());
    }

    #[test]
    fn clear_returns_to_idle_and_hides_rings() {
        let mut c = controller(2);
        let _ = c.set_focus(Some(0));
        assert!(c.clear());
        assert_eq!(c.state(), FocusState::Idle);
        assert_eq!(c.rings().anchor(), None);
        assert!(!c.rings().is_pulsing());
        assert!(!c.clear());
    }

    #[test]
    fn unknown_id_counts_as_no_candidate() {
        let mut c = controller(2);
        let _ = c.set_focus(Some(1));
        assert!(c.set_focus(Some(7)));
        assert_eq!(c.state(), FocusState::Idle);
    }

    #[test]
    fn focus_state_from_option() {
        assert_eq!(FocusState::from(None), FocusState::Idle);
        assert_eq!(FocusState::from(Some(3)).active(), Some(3));
    }
}
