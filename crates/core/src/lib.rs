//! Core utilities for the Chapiz tools
//!
//! This crate provides shared functionality used by the breed search CLI and
//! any service embedding the search crate:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//! - **Debouncing**: Deferring keystroke-driven work until input settles
//! - **Rate limiting**: Sliding windows over an injected store
//!
//! # Example
//!
//! ```rust,no_run
//! use chapiz_core::config::Config;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! println!("Showing up to {} suggestions", config.schema.search.limit);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod debounce;
pub mod error;
pub mod rate_limit;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::debounce::Debouncer;
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::rate_limit::{MemoryWindowStore, RateLimitConfig, SlidingWindowLimiter, WindowStore};
}
