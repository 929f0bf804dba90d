use std::time::{Duration, Instant};

/// Trailing-edge debounce for expensive derived recomputation.
///
/// Every [`notify`](Self::notify) pushes the deadline back by the quiet
/// period; [`poll`](Self::poll) fires once the inputs have been quiet that
/// long. Time is supplied by the caller, so one debouncer can be driven by
/// any event loop and tested without sleeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    #[must_use]
    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Records an input change at `now`.
    pub fn notify(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending recompute fires, if one is pending.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` exactly once per burst of notifications, after the
    /// quiet period has elapsed since the last one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops a pending recompute.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
