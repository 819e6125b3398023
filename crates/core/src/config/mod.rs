//! Configuration loading and schema definitions
//!
//! Shared configuration types for the Chapiz tools.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_CANDIDATES};
pub use schema::*;
