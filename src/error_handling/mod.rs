//! Error handling.
//!
//! Errors are split by where they stop:
//! - **Lookup errors** are scoped to one record type and never leave the collector
//! - **Domain and configuration errors** reject input before any query is made
//! - **Report errors** abort the run when the document cannot be persisted

mod types;

// Re-export public API
pub use types::{DomainError, InitializationError, LookupError, ReportError};
