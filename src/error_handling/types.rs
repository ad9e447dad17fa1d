//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Rejected domain input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Nothing but whitespace was supplied.
    #[error("No domain entered")]
    Empty,
}

/// Why a single record type lookup produced no records.
///
/// These never escape the collector; they are logged and counted, and the
/// affected record type is reported as empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The queried name does not exist (NXDOMAIN).
    #[error("domain does not exist (NXDOMAIN)")]
    NoSuchDomain,

    /// The resolver gave up waiting for an answer.
    #[error("query timed out")]
    Timeout,

    /// Any other resolver or transport failure (refused, malformed, I/O).
    #[error("resolver error: {0}")]
    Resolver(String),
}

/// Error types for writing the report document.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The output directory or file could not be created or written.
    #[error("Failed to write report to {}: {source}", path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The DOCX package could not be assembled.
    #[error("Failed to build DOCX report {}: {message}", path.display())]
    Docx {
        /// Target path
        path: PathBuf,
        /// Message from the document library
        message: String,
    },

    /// The report could not be serialized to JSON.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
