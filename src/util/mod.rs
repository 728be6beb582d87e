//! Utility functions module
//!
//! Contains helpers for formatting money amounts and ticket numbers.

pub mod format;

// Re-export commonly used functions
pub use format::{format_baht, group_thousands, spaced_digits};
