//! Keystroke debouncing
//!
//! Holds the latest submitted value until input has been quiet for a fixed
//! interval. Earlier submissions are replaced, not queued.
//!
//! # Example
//!
//! ```rust
//! use chapiz_core::debounce::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let mut debouncer = Debouncer::new(Duration::from_millis(300));
//! let start = Instant::now();
//!
//! debouncer.submit_at("p", start);
//! debouncer.submit_at("pe", start + Duration::from_millis(100));
//! assert_eq!(debouncer.poll_at(start + Duration::from_millis(200)), None);
//! assert_eq!(debouncer.poll_at(start + Duration::from_millis(400)), Some("pe"));
//! ```

use std::time::{Duration, Instant};

/// Defers a value until submissions stop for `interval`
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    interval: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet interval
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    /// Quiet interval
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Replace the pending value and restart the interval
    pub fn submit(&mut self, value: T) {
        self.submit_at(value, Instant::now());
    }

    /// [`submit`](Self::submit) with an explicit clock reading
    pub fn submit_at(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if the interval has elapsed
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// [`poll`](Self::poll) with an explicit clock reading
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|(_, submitted)| now.saturating_duration_since(*submitted) >= self.interval);

        if ready {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Time left before the pending value becomes ready, if any is pending
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, submitted)| self.interval.saturating_sub(now.saturating_duration_since(*submitted)))
    }

    /// Whether a value is waiting
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without emitting it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_emits_after_quiet_interval() {
        let mut d = Debouncer::new(ms(300));
        let t0 = Instant::now();

        d.submit_at("bengal", t0);
        assert_eq!(d.poll_at(t0 + ms(299)), None);
        assert_eq!(d.poll_at(t0 + ms(300)), Some("bengal"));
        assert!(!d.is_pending());
        assert_eq!(d.poll_at(t0 + ms(900)), None);
    }

    #[test]
    fn test_new_submission_restarts_interval() {
        let mut d = Debouncer::new(ms(300));
        let t0 = Instant::now();

        d.submit_at("b", t0);
        d.submit_at("be", t0 + ms(250));
        assert_eq!(d.poll_at(t0 + ms(400)), None);
        assert_eq!(d.remaining_at(t0 + ms(400)), Some(ms(150)));
        assert_eq!(d.poll_at(t0 + ms(550)), Some("be"));
    }

    #[test]
    fn test_cancel() {
        let mut d = Debouncer::new(ms(10));
        let t0 = Instant::now();
        d.submit_at(1, t0);
        assert_eq!(d.cancel(), Some(1));
        assert_eq!(d.poll_at(t0 + ms(20)), None);
        assert_eq!(d.remaining_at(t0), None);
    }

    #[test]
    fn test_zero_interval() {
        let mut d = Debouncer::new(Duration::ZERO);
        d.submit("now");
        assert_eq!(d.poll(), Some("now"));
    }
}
