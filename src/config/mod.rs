//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (DNS timeouts, report markers, file naming)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ConfigValidationError, LogFormat, LogLevel, Opt, ReportFormat};
