//! Application initialization.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (plain or JSON, honoring `RUST_LOG`)
//! - DNS resolver (system configuration, caller-supplied timeouts)

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
