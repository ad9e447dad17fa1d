//! dns_report library: DNS record collection and reporting
//!
//! Resolves the A, MX, NS and TXT records of one domain and writes them to a
//! timestamped report document. Every record type is queried independently, so a
//! type that fails or has no records shows up as an empty section instead of
//! aborting the run.
//!
//! # Example
//!
//! ```no_run
//! use dns_report::{Config, ReportFormat, run_report};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: "example.com".to_string(),
//!     format: ReportFormat::Markdown,
//!     ..Default::default()
//! };
//!
//! let summary = run_report(config).await?;
//! println!("Wrote {}", summary.report_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime; a current-thread runtime is enough
//! since queries are issued one at a time.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod collector;
pub mod config;
pub mod dns;
mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod prompt;
pub mod report;

// Re-export public API
pub use collector::{collect, collect_with_summary, resolve_host_addresses, CollectionSummary};
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, ReportFormat};
pub use dns::{HostAddress, QueryOutcome, RecordEntry, RecordSet, RecordSource, RecordType};
pub use domain::Domain;
pub use error_handling::{DomainError, InitializationError, LookupError, ReportError};
pub use report::{assemble, Report, Section, SectionBody};
pub use run::{run_report, run_report_with, RunReport};

// Internal run module (collect, assemble, write)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use chrono::Local;
    use log::{info, warn};

    use crate::collector::{collect_with_summary, resolve_host_addresses};
    use crate::config::Config;
    use crate::dns::{HickorySource, RecordSource, RecordType};
    use crate::domain::Domain;
    use crate::export::write_report;
    use crate::initialization::init_resolver;
    use crate::report::assemble;

    /// Outcome of one report run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Analyzed domain
        pub domain: Domain,
        /// Path of the written report
        pub report_path: PathBuf,
        /// Total records found across all types
        pub records_found: usize,
        /// Record types that came back empty, in report order
        pub empty_types: Vec<RecordType>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Collects the records of `config.domain` and writes the report.
    ///
    /// Uses the system DNS configuration with the configured timeout and
    /// attempts.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or domain is invalid, or the report
    /// cannot be written. DNS failures are never errors; they produce empty
    /// sections.
    pub async fn run_report(config: Config) -> Result<RunReport> {
        config.validate().context("Invalid configuration")?;
        let resolver = init_resolver(config.dns_timeout_secs, config.dns_attempts);
        run_report_with(config, &HickorySource::new(resolver)).await
    }

    /// Same as [`run_report`] with a caller-supplied record source.
    ///
    /// # Errors
    ///
    /// See [`run_report`].
    pub async fn run_report_with<S: RecordSource>(config: Config, source: &S) -> Result<RunReport> {
        config.validate().context("Invalid configuration")?;
        let domain = Domain::new(&config.domain).context("Invalid domain")?;
        let start_time = Instant::now();

        info!("Collecting DNS records for {domain}");
        let (mut records, summary) = collect_with_summary(&domain, source).await;
        let captured_at = Local::now().naive_local();

        if summary.domain_does_not_exist() {
            warn!("Domain {domain} does not exist (NXDOMAIN); the report will be empty");
        } else if records.is_empty() {
            warn!("No DNS records found for {domain}");
        }
        for (record_type, error) in summary.failures() {
            info!("{record_type} reported as empty: {error}");
        }

        if config.resolve_hosts {
            info!("Resolving MX and NS host addresses");
            resolve_host_addresses(&mut records, source).await;
        }

        let report = assemble(&domain, &records, captured_at);
        let report_path = write_report(&report, config.format, &config.output_dir)
            .context("Failed to write report")?;
        info!("Report written to {}", report_path.display());

        let empty_types = records
            .iter()
            .filter(|(_, entries)| entries.is_empty())
            .map(|(t, _)| t)
            .collect();

        Ok(RunReport {
            domain,
            report_path,
            records_found: summary.records_found(),
            empty_types,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
