//! Configuration types and CLI options.
//!
//! `Config` is the library-facing configuration and can be built without clap.
//! `Opt` is the command-line parser that the binary converts into a `Config`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS, MAX_DNS_ATTEMPTS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: One JSON object per line for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Output document format of the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Word document (default)
    Docx,
    /// Markdown text
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// File extension used for this format, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Docx => "docx",
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dns_report::Config;
///
/// let config = Config {
///     domain: "example.com".to_string(),
///     resolve_hosts: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain to analyze
    pub domain: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Report document format
    pub format: ReportFormat,

    /// Directory the report is written into
    pub output_dir: PathBuf,

    /// Also resolve the address of every MX and NS host
    pub resolve_hosts: bool,

    /// Per-query DNS timeout in seconds
    pub dns_timeout_secs: u64,

    /// Resolver attempts per query
    pub dns_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            format: ReportFormat::Docx,
            output_dir: PathBuf::from("."),
            resolve_hosts: false,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            dns_attempts: DNS_ATTEMPTS,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl Config {
    /// Checks the numeric transport settings.
    ///
    /// The domain itself is checked separately when it is turned into a
    /// [`Domain`](crate::Domain).
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dns_timeout_secs == 0 {
            return Err(ConfigValidationError {
                field: "dns_timeout_secs",
                message: "DNS timeout must be greater than 0 seconds".to_string(),
            });
        }
        if self.dns_attempts == 0 || self.dns_attempts > MAX_DNS_ATTEMPTS {
            return Err(ConfigValidationError {
                field: "dns_attempts",
                message: format!(
                    "DNS attempts must be between 1 and {MAX_DNS_ATTEMPTS}, got {}",
                    self.dns_attempts
                ),
            });
        }
        Ok(())
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Prompt for the domain, write DNS_Report_<domain>.docx
/// dns_report
///
/// # Pass the domain and resolve MX/NS host addresses
/// dns_report example.com --resolve-hosts
///
/// # Markdown report into ./reports
/// dns_report example.com --format markdown --output-dir ./reports
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dns_report",
    about = "Collects the A, MX, NS and TXT records of a domain into a report document."
)]
pub struct Opt {
    /// Domain to analyze (prompted for when omitted)
    pub domain: Option<String>,

    /// Report format: docx|markdown|json
    #[arg(long, value_enum, default_value_t = ReportFormat::Docx)]
    pub format: ReportFormat,

    /// Directory to write the report into
    #[arg(long, value_parser, default_value = ".")]
    pub output_dir: PathBuf,

    /// Resolve the IPv4 address of every MX exchange and NS host
    #[arg(long)]
    pub resolve_hosts: bool,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Resolver attempts per query
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    pub dns_attempts: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the library configuration for `domain`.
    ///
    /// The domain is passed in because it may come from the prompt rather than argv.
    pub fn into_config(self, domain: String) -> Config {
        Config {
            domain,
            log_level: self.log_level,
            log_format: self.log_format,
            format: self.format,
            output_dir: self.output_dir,
            resolve_hosts: self.resolve_hosts,
            dns_timeout_secs: self.dns_timeout_secs,
            dns_attempts: self.dns_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_report_format_extensions() {
        assert_eq!(ReportFormat::Docx.extension(), "docx");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Json.extension(), "json");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            dns_timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "dns_timeout_secs");
        assert!(err.message.contains("greater than 0"));
    }

    #[test]
    fn test_attempts_out_of_range_rejected() {
        for attempts in [0, MAX_DNS_ATTEMPTS + 1] {
            let config = Config {
                dns_attempts: attempts,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert_eq!(err.field, "dns_attempts");
        }
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigValidationError {
            field: "dns_timeout_secs",
            message: "DNS timeout must be greater than 0 seconds".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid dns_timeout_secs: DNS timeout must be greater than 0 seconds"
        );
        let as_error: &dyn std::error::Error = &err;
        assert!(as_error.source().is_none());
    }

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::try_parse_from(["dns_report"]).expect("no arguments should parse");
        assert!(opt.domain.is_none());
        assert_eq!(opt.format, ReportFormat::Docx);
        assert_eq!(opt.output_dir, PathBuf::from("."));
        assert!(!opt.resolve_hosts);
        assert_eq!(opt.dns_timeout_secs, DNS_TIMEOUT_SECS);
        assert_eq!(opt.dns_attempts, DNS_ATTEMPTS);
    }

    #[test]
    fn test_opt_into_config_carries_flags() {
        let opt = Opt::try_parse_from([
            "dns_report",
            "example.com",
            "--format",
            "markdown",
            "--resolve-hosts",
            "--dns-timeout-secs",
            "7",
        ])
        .expect("flags should parse");
        let domain = opt.domain.clone().unwrap_or_default();
        let config = opt.into_config(domain);
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.format, ReportFormat::Markdown);
        assert!(config.resolve_hosts);
        assert_eq!(config.dns_timeout_secs, 7);
    }
}
