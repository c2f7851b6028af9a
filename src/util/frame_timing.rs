//! Wall-clock frame deltas for the frame loop.

use web_time::{Duration, Instant};

/// Wall-clock frame timer with FPS smoothing.
///
/// Produces the per-frame elapsed time fed to the widget tick. Deltas are
/// capped so a backgrounded tab does not fast-forward every timer at once.
pub struct FrameTiming {
    /// Last frame timestamp (None until the first frame).
    last_frame: Option<Instant>,
    /// Upper bound on a single frame's delta.
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer; single deltas are capped at `max_delta`.
    #[must_use]
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: None,
            max_delta,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Forget the previous timestamp so the next frame reports zero delta.
    pub fn reset(&mut self) {
        self.last_frame = None;
    }

    /// Mark the start of a frame and return the (capped) time since the
    /// previous one.
    pub fn begin_frame(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_frame = Some(now);

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut timing = FrameTiming::new(Duration::from_millis(100));
        assert_eq!(timing.begin_frame(), Duration::ZERO);
    }

    #[test]
    fn delta_is_capped() {
        let mut timing = FrameTiming::new(Duration::ZERO);
        let _ = timing.begin_frame();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(timing.begin_frame(), Duration::ZERO);
    }
}
