//! Deadline-based debouncing.
//!
//! Each push replaces the pending value and restarts the deadline, so only
//! the last value of a burst is ever released.

use std::time::Duration;

use tokio::time::Instant;

/// Default delay between the last keystroke and the search render
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Collapses bursts of values into the last one
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value`, dropping whatever was pending
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// When the pending value becomes due
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending value if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.pending.take() {
            Some((deadline, value)) if deadline <= now => Some(value),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop the pending value without releasing it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, value)| value)
    }
}
