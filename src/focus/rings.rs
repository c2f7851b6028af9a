//! Pulsing rings drawn around the focused point.

use web_time::Duration;

use crate::options::FocusOptions;
use crate::scene::PointId;
use crate::util::timer::Interval;

/// Rings stop growing once their radius passes this value.
const MAX_RING_RADIUS: f32 = 12.0;

/// Visual state of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingState {
    /// Ring radius for the current pulse step.
    pub radius: f32,
    /// Scale applied to the ring mesh.
    pub scale: f32,
}

/// Concentric rings anchored on the focused point, pulsing outward.
///
/// Each pulse step advances a phase `p` through `0..steps`; ring `i` sits at
/// radius `p + spacing * i` and takes scale `radius / 4 + 1` while that
/// radius is within bounds, otherwise keeping its previous scale.
#[derive(Debug, Clone)]
pub struct FocusRings {
    enabled: bool,
    anchor: Option<PointId>,
    pulse: Interval,
    phase: u32,
    steps: u32,
    spacing: f32,
    rings: Vec<RingState>,
}

impl FocusRings {
    /// Create hidden rings configured from `options`.
    #[must_use]
    pub fn new(options: &FocusOptions) -> Self {
        let mut rings = Self {
            enabled: options.rings,
            anchor: None,
            pulse: Interval::new(Duration::from_millis(
                options.ring_pulse_interval_ms,
            )),
            phase: 0,
            steps: options.ring_pulse_steps.max(1),
            spacing: options.ring_spacing,
            rings: vec![
                RingState {
                    radius: 0.0,
                    scale: 1.0,
                };
                options.ring_count
            ],
        };
        rings.reset();
        rings
    }

    /// Show the rings at `id` and start pulsing.
    pub fn show(&mut self, id: PointId) {
        if !self.enabled {
            return;
        }
        self.anchor = Some(id);
        self.phase = 0;
        self.pulse.start();
        self.layout();
    }

    /// Hide the rings, reset every scale to 1, and stop pulsing.
    pub fn clear(&mut self) {
        self.anchor = None;
        self.phase = 0;
        self.pulse.cancel();
        self.reset();
    }

    fn reset(&mut self) {
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.radius = self.spacing * i as f32;
            ring.scale = 1.0;
        }
    }

    /// Stop pulsing without hiding.
    pub fn cancel_timers(&mut self) {
        self.pulse.cancel();
    }

    /// Point the rings are anchored on, if visible.
    #[must_use]
    pub fn anchor(&self) -> Option<PointId> {
        self.anchor
    }

    /// Whether the pulse loop is running.
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_running()
    }

    /// Current pulse phase.
    #[must_use]
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// Per-ring state, innermost first.
    #[must_use]
    pub fn rings(&self) -> &[RingState] {
        &self.rings
    }

    /// Advance the pulse loop by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        // One full cycle visits every phase, so anything beyond it only
        // matters modulo `steps`.
        let fired = self.pulse.advance(dt);
        let replay = if fired > self.steps {
            self.steps + fired % self.steps
        } else {
            fired
        };
        for _ in 0..replay {
            self.phase = (self.phase + 1) % self.steps;
            self.layout();
        }
    }

    fn layout(&mut self) {
        let inner = self.phase as f32;
        for (i, ring) in self.rings.iter_mut().enumerate() {
            ring.radius = inner + self.spacing * i as f32;
            if ring.radius <= MAX_RING_RADIUS {
                ring.scale = ring.radius / 4.0 + 1.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn rings() -> FocusRings {
        FocusRings::new(&FocusOptions::default())
    }

    #[test]
    fn show_starts_pulse_at_phase_zero() {
        let mut r = rings();
        r.show(4);
        assert_eq!(r.anchor(), Some(4));
        assert!(r.is_pulsing());
        let scales: Vec<f32> = r.rings().iter().map(|s| s.scale).collect();
        assert_eq!(scales, vec![1.0, 1.75, 2.5]);
    }

    #[test]
    fn pulse_steps_every_interval() {
        let mut r = rings();
        r.show(0);
        r.advance(119 * MS);
        assert_eq!(r.phase(), 0);
        r.advance(MS);
        assert_eq!(r.phase(), 1);
        r.advance(240 * MS);
        assert_eq!(r.phase(), 3);
        assert_eq!(r.rings()[0].radius, 3.0);
        assert_eq!(r.rings()[2].radius, 9.0);
    }

    #[test]
    fn phase_wraps_and_outer_ring_holds_scale() {
        let mut r = rings();
        r.show(0);
        r.advance(120 * 11 * MS);
        assert_eq!(r.phase(), 11);
        // Ring 2 is at radius 17, past the limit: keeps the scale from
        // radius 12 (phase 6).
        assert_eq!(r.rings()[2].radius, 17.0);
        assert_eq!(r.rings()[2].scale, 4.0);
        assert_eq!(r.rings()[0].scale, 11.0 / 4.0 + 1.0);

        r.advance(120 * MS);
        assert_eq!(r.phase(), 0);
    }

    #[test]
    fn long_stall_lands_on_same_state_as_stepping() {
        let options = FocusOptions::default();
        let period = Duration::from_millis(options.ring_pulse_interval_ms);

        let mut stepped = FocusRings::new(&options);
        stepped.show(0);
        for _ in 0..1_000 {
            stepped.advance(period);
        }

        let mut stalled = FocusRings::new(&options);
        stalled.show(0);
        stalled.advance(period * 1_000);

        assert_eq!(stalled.phase(), stepped.phase());
        assert_eq!(stalled.rings(), stepped.rings());

        stalled.advance(Duration::MAX);
        assert!(stalled.phase() < options.ring_pulse_steps);
    }

    #[test]
    fn clear_resets_and_stops() {
        let mut r = rings();
        r.show(1);
        r.advance(500 * MS);
        r.clear();
        assert_eq!(r.anchor(), None);
        assert!(!r.is_pulsing());
        assert!(r.rings().iter().all(|s| s.scale == 1.0));
        r.advance(500 * MS);
        assert_eq!(r.phase(), 0);
        // Clearing twice is harmless.
        r.clear();
        assert_eq!(r.anchor(), None);
    }

    #[test]
    fn disabled_rings_never_show() {
        let mut r = FocusRings::new(&FocusOptions {
            rings: false,
            ..FocusOptions::default()
        });
        r.show(2);
        assert_eq!(r.anchor(), None);
        assert!(!r.is_pulsing());
    }
}
