//! Tick-driven timers.
//!
//! Every delayed or periodic behavior of the widget (pointer debounce, idle
//! spin, focus-ring pulse) is a value advanced by the frame tick with the
//! elapsed time, instead of an independently scheduled callback. Dropping or
//! cancelling a timer therefore cannot leave anything running behind.
//!
//! Cancelling is idempotent: cancelling an idle, fired, or already cancelled
//! timer is a no-op.

use web_time::Duration;

/// One-shot timer that fires once after its delay has elapsed.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: Option<Duration>,
}

impl Countdown {
    /// Create an idle countdown.
    #[must_use]
    pub fn new() -> Self {
        Self { remaining: None }
    }

    /// (Re)arm the countdown. Any pending expiry is discarded.
    pub fn start(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    /// Disarm the countdown.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Whether the countdown is armed and has not fired yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt`. Returns `true` exactly once, on the tick where the
    /// delay runs out.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        if dt >= remaining {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(remaining - dt);
            false
        }
    }
}

/// Periodic timer that fires every `period` while running.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    accumulated: Duration,
    running: bool,
}

impl Interval {
    /// Create a stopped interval with the given period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    /// Start (or restart) the interval from a zero phase.
    pub fn start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.running = true;
    }

    /// Stop the interval and drop any partial period.
    pub fn cancel(&mut self) {
        self.accumulated = Duration::ZERO;
        self.running = false;
    }

    /// Whether the interval is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The configured period.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance by `dt` and return how many periods completed.
    ///
    /// A zero period never fires.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running || self.period.is_zero() {
            return 0;
        }
        let total = self.accumulated.saturating_add(dt).as_nanos();
        let period = self.period.as_nanos();
        let remainder = u64::try_from(total % period).unwrap_or(u64::MAX);
        self.accumulated = Duration::from_nanos(remainder);
        u32::try_from(total / period).unwrap_or(u32::MAX)
    }
}
