//! Wall-clock timers that report into the metrics registry.

use crate::metrics::metrics;
use std::time::{Duration, Instant};

/// Timer for measuring operation duration
///
/// The elapsed time is recorded as a histogram value in milliseconds,
/// either on [`stop`](Timer::stop) or when dropped.
pub struct Timer {
    name: String,
    start: Instant,
    recorded: bool,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
            recorded: false,
        }
    }

    /// Stop the timer and record the duration
    pub fn stop(mut self) -> Duration {
        self.record()
    }

    fn record(&mut self) -> Duration {
        let duration = self.start.elapsed();
        if !self.recorded {
            self.recorded = true;
            metrics().histogram(&self.name, duration.as_secs_f64() * 1000.0);
            tracing::debug!(
                metric = %self.name,
                duration_ms = duration.as_millis(),
                "Timer completed"
            );
        }
        duration
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.record();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_records_once() {
        let timer = Timer::start("test.timer_records_once");
        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.stop();
        assert!(duration.as_millis() >= 10);

        let stats = metrics().histogram_stats("test.timer_records_once").unwrap();
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_timer_records_on_drop() {
        {
            let _timer = Timer::start("test.timer_on_drop");
        }
        assert_eq!(metrics().histogram_stats("test.timer_on_drop").unwrap().count, 1);
    }
}
