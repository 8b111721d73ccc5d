//! Debounced scheduling
//!
//! A `Debouncer` holds at most one pending value with a deadline. Scheduling
//! again before the deadline replaces the value and pushes the deadline out
//! (last write wins, nothing is queued). The owner polls it from its event
//! loop with the current time; the value is released once, when the quiet
//! period has elapsed.
//!
//! Time is passed in explicitly so the schedule is deterministic under test.
//!
//! ```
//! use papershelf::debounce::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut search = Debouncer::new(Duration::from_millis(150));
//! search.schedule("d".to_string(), start);
//! search.schedule("de".to_string(), start + Duration::from_millis(50));
//!
//! assert_eq!(search.poll(start + Duration::from_millis(150)), None);
//! assert_eq!(search.poll(start + Duration::from_millis(200)), Some("de".to_string()));
//! assert_eq!(search.poll(start + Duration::from_millis(400)), None);
//! ```

use std::time::{Duration, Instant};

/// Default quiet period for search input
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: Instant,
}

/// Cancellable single-slot scheduled task
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet period
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a value, cancelling and replacing any pending one
    pub fn schedule(&mut self, value: T, now: Instant) {
        let due = now + self.delay;
        tracing::trace!(delay_ms = self.delay.as_millis(), "debounce rescheduled");
        self.pending = Some(Pending { value, due });
    }

    /// Release the pending value if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Release the pending value immediately, regardless of its deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drop the pending value without releasing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Time left until the pending value is due, zero if already due
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|due| due.saturating_duration_since(now))
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}
