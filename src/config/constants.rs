//! Configuration constants.
//!
//! Defaults for the DNS transport and the fixed strings that appear in every report.

/// DNS query timeout in seconds.
/// Most queries complete in well under a second; 3s fails fast on unresponsive servers.
pub const DNS_TIMEOUT_SECS: u64 = 3;

/// Number of attempts the resolver makes per query before giving up.
pub const DNS_ATTEMPTS: usize = 2;

/// Upper bound accepted for `--dns-attempts`.
pub const MAX_DNS_ATTEMPTS: usize = 10;

/// Marker rendered in place of entries when a record type yielded nothing.
pub const NONE_FOUND_MARKER: &str = "None found";

/// Rendered in place of an address when a host could not be resolved.
pub const UNRESOLVED_ADDRESS_MARKER: &str = "N/A";

/// Rendered in place of an address when the host lookup timed out.
pub const HOST_TIMEOUT_MARKER: &str = "Time limit exceeded";

/// How the DNS root is written; a null MX (RFC 7505) points its exchange here.
pub const ROOT_NAME: &str = ".";

/// File name prefix of every written report (`DNS_Report_example_com.docx`).
pub const REPORT_FILE_PREFIX: &str = "DNS_Report_";

/// Footer line of DOCX reports.
pub const REPORT_FOOTER: &str = "Generated automatically";

/// Prompt shown when no domain was passed on the command line.
pub const DOMAIN_PROMPT: &str = "Enter the domain to analyze (e.g., example.com): ";
