//! Sliding-window rate limiting over an injected store
//!
//! Used to throttle verification emails and codes per address. The window
//! records live in a [`WindowStore`] owned by the limiter instead of a
//! process-wide map, so each service instance (or test) brings its own.
//!
//! # Example
//!
//! ```rust
//! use chapiz_core::rate_limit::{MemoryWindowStore, RateLimitConfig, SlidingWindowLimiter};
//!
//! let limiter = SlidingWindowLimiter::new(
//!     RateLimitConfig::verification_email(),
//!     MemoryWindowStore::new(),
//! );
//!
//! assert!(limiter.try_acquire("owner@example.com"));
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Rate limiter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::verification_email()
    }
}

impl RateLimitConfig {
    /// Create a config with an explicit window
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }

    /// Three verification emails per address every ten minutes
    #[must_use]
    pub fn verification_email() -> Self {
        Self::new(3, Duration::from_secs(10 * 60))
    }

    /// Per-minute rate limit
    #[must_use]
    pub fn per_minute(max: u32) -> Self {
        Self::new(max, Duration::from_secs(60))
    }
}

/// Storage for per-key request timestamps
pub trait WindowStore: Send + Sync {
    /// Timestamps recorded for `key`, oldest first
    fn load(&self, key: &str) -> Vec<Instant>;

    /// Replace the timestamps for `key`
    fn save(&self, key: &str, window: Vec<Instant>);

    /// Forget `key`
    fn clear(&self, key: &str);
}

impl<T: WindowStore + ?Sized> WindowStore for Arc<T> {
    fn load(&self, key: &str) -> Vec<Instant> {
        (**self).load(key)
    }

    fn save(&self, key: &str, window: Vec<Instant>) {
        (**self).save(key, window);
    }

    fn clear(&self, key: &str) {
        (**self).clear(key);
    }
}

/// In-memory [`WindowStore`]
#[derive(Debug, Default)]
pub struct MemoryWindowStore {
    windows: RwLock<HashMap<String, Vec<Instant>>>,
}

impl MemoryWindowStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether no key is tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WindowStore for MemoryWindowStore {
    fn load(&self, key: &str) -> Vec<Instant> {
        // Handle poisoned lock by recovering the data (still valid even after panic)
        let windows = self.windows.read().unwrap_or_else(|e| e.into_inner());
        windows.get(key).cloned().unwrap_or_default()
    }

    fn save(&self, key: &str, window: Vec<Instant>) {
        let mut windows = self.windows.write().unwrap_or_else(|e| e.into_inner());
        if window.is_empty() {
            windows.remove(key);
        } else {
            windows.insert(key.to_string(), window);
        }
    }

    fn clear(&self, key: &str) {
        let mut windows = self.windows.write().unwrap_or_else(|e| e.into_inner());
        windows.remove(key);
    }
}

/// Sliding window rate limiter
pub struct SlidingWindowLimiter<S> {
    config: RateLimitConfig,
    store: S,
}

impl<S: WindowStore> SlidingWindowLimiter<S> {
    /// Create a limiter that records windows in `store`
    #[must_use]
    pub fn new(config: RateLimitConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Try to acquire permission
    #[must_use]
    pub fn try_acquire(&self, key: &str) -> bool {
        self.try_acquire_at(key, Instant::now())
    }

    /// [`try_acquire`](Self::try_acquire) with an explicit clock reading
    #[must_use]
    pub fn try_acquire_at(&self, key: &str, now: Instant) -> bool {
        let mut window = self.live_window(key, now);

        let allowed = window.len() < self.config.max_requests as usize;
        if allowed {
            window.push(now);
        } else {
            tracing::debug!(key, max = self.config.max_requests, "Rate limit reached");
        }
        self.store.save(key, window);
        allowed
    }

    /// Like [`try_acquire_at`](Self::try_acquire_at) but returns a
    /// [`ErrorCode::RateLimited`](crate::ErrorCode::RateLimited) error with a retry hint
    pub fn check_at(&self, key: &str, now: Instant) -> Result<()> {
        if self.try_acquire_at(key, now) {
            Ok(())
        } else {
            Err(Error::rate_limited(key, self.retry_after_at(key, now)))
        }
    }

    /// Requests still allowed in the current window
    #[must_use]
    pub fn remaining(&self, key: &str) -> u32 {
        self.remaining_at(key, Instant::now())
    }

    /// [`remaining`](Self::remaining) with an explicit clock reading
    #[must_use]
    pub fn remaining_at(&self, key: &str, now: Instant) -> u32 {
        let used = u32::try_from(self.live_window(key, now).len()).unwrap_or(u32::MAX);
        self.config.max_requests.saturating_sub(used)
    }

    /// Time until the oldest request leaves the window; zero if not limited
    #[must_use]
    pub fn retry_after_at(&self, key: &str, now: Instant) -> Duration {
        let window = self.live_window(key, now);
        if window.len() < self.config.max_requests as usize {
            return Duration::ZERO;
        }
        window
            .first()
            .map(|oldest| self.config.window.saturating_sub(now.saturating_duration_since(*oldest)))
            .unwrap_or(Duration::ZERO)
    }

    /// Reset for a key
    pub fn reset(&self, key: &str) {
        self.store.clear(key);
    }

    fn live_window(&self, key: &str, now: Instant) -> Vec<Instant> {
        let mut window = self.store.load(key);
        // Entries older than the window no longer count.
        window.retain(|&t| now.saturating_duration_since(t) < self.config.window);
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn limiter(max: u32, window_secs: u64) -> SlidingWindowLimiter<MemoryWindowStore> {
        SlidingWindowLimiter::new(
            RateLimitConfig::new(max, Duration::from_secs(window_secs)),
            MemoryWindowStore::new(),
        )
    }

    #[test]
    fn test_sliding_window_basic() {
        let limiter = limiter(2, 60);
        let t0 = Instant::now();

        assert!(limiter.try_acquire_at("a@example.com", t0));
        assert!(limiter.try_acquire_at("a@example.com", t0));
        assert!(!limiter.try_acquire_at("a@example.com", t0));
    }

    #[test]
    fn test_window_slides() {
        let limiter = limiter(2, 60);
        let t0 = Instant::now();

        assert!(limiter.try_acquire_at("k", t0));
        assert!(limiter.try_acquire_at("k", t0 + Duration::from_secs(30)));
        assert!(!limiter.try_acquire_at("k", t0 + Duration::from_secs(59)));
        // First request has left the window.
        assert!(limiter.try_acquire_at("k", t0 + Duration::from_secs(60)));
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = limiter(1, 60);
        let t0 = Instant::now();

        assert!(limiter.try_acquire_at("key1", t0));
        assert!(!limiter.try_acquire_at("key1", t0));
        assert!(limiter.try_acquire_at("key2", t0));
    }

    #[test]
    fn test_remaining_and_retry_after() {
        let limiter = limiter(3, 600);
        let t0 = Instant::now();

        assert_eq!(limiter.remaining_at("k", t0), 3);
        for _ in 0..3 {
            assert!(limiter.try_acquire_at("k", t0));
        }
        assert_eq!(limiter.remaining_at("k", t0), 0);
        assert_eq!(
            limiter.retry_after_at("k", t0 + Duration::from_secs(100)),
            Duration::from_secs(500)
        );
        assert_eq!(limiter.retry_after_at("other", t0), Duration::ZERO);
    }

    #[test]
    fn test_check_at_error() {
        let limiter = limiter(1, 60);
        let t0 = Instant::now();

        assert!(limiter.check_at("k", t0).is_ok());
        let err = limiter.check_at("k", t0).unwrap_err();
        assert_eq!(err.code, ErrorCode::RateLimited);
        assert_eq!(err.suggestion.as_deref(), Some("Retry in 60s"));
    }

    #[test]
    fn test_reset() {
        let limiter = limiter(1, 60);
        let t0 = Instant::now();

        assert!(limiter.try_acquire_at("k", t0));
        limiter.reset("k");
        assert!(limiter.try_acquire_at("k", t0));
    }

    #[test]
    fn test_injected_store_is_shared() {
        let store = Arc::new(MemoryWindowStore::new());
        let first = SlidingWindowLimiter::new(RateLimitConfig::per_minute(1), Arc::clone(&store));
        let second = SlidingWindowLimiter::new(RateLimitConfig::per_minute(1), Arc::clone(&store));
        let t0 = Instant::now();

        assert!(first.try_acquire_at("k", t0));
        assert!(!second.try_acquire_at("k", t0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_default_is_verification_email() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_requests, 3);
        assert_eq!(config.window, Duration::from_secs(600));
    }
}
