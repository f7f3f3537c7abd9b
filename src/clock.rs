//! Periodic interval clocks
//!
//! Time is fed in explicitly (no wall clock), so the same frame deltas always
//! produce the same sequence of firings.

use std::time::Duration;

/// A repeating timer that fires once per `period` while armed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    /// Time accumulated since the last firing
    elapsed: Duration,
    armed: bool,
}

impl Interval {
    /// Create a disarmed interval. A zero period is bumped to 1ms.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            armed: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// (Re)start from zero; arming an armed interval discards its progress
    pub fn arm(&mut self) {
        self.elapsed = Duration::ZERO;
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        self.elapsed = Duration::ZERO;
        self.armed = false;
    }

    /// Time left until the next firing, `None` when disarmed
    pub fn until_due(&self) -> Option<Duration> {
        self.armed.then(|| self.period.saturating_sub(self.elapsed))
    }

    /// Let `dt` pass. Returns true when the interval fired.
    ///
    /// Callers step by at most `until_due()`, so a single call fires at most
    /// once; any overshoot carries into the next period.
    pub fn wait(&mut self, dt: Duration) -> bool {
        if !self.armed {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.period {
            self.elapsed -= self.period;
            true
        } else {
            false
        }
    }
}
