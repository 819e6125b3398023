//! Terminal output helpers for the Chapiz tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Score and duration formatting
//! - Error reporting in text or JSON

#![warn(missing_docs)]

pub mod output;
