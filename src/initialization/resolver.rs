//! DNS resolver initialization.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

/// Initializes the DNS resolver from the system configuration.
///
/// Nameservers come from the operating system (`/etc/resolv.conf` on Unix).
/// If that cannot be read, the library's default upstream servers are used.
/// Timeout and attempts always come from the caller.
///
/// Search domains are never appended (`ndots = 0`) so the name queried is
/// exactly the one entered, and the answer cache is disabled so every
/// collection re-queries.
pub fn init_resolver(timeout_secs: u64, attempts: usize) -> TokioAsyncResolver {
    let (config, mut opts) = match read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            warn!("Failed to read system DNS configuration ({e}); using default upstream resolvers");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = attempts;
    opts.ndots = 0;
    opts.cache_size = 0;

    debug!(
        "DNS resolver: {} nameserver(s), timeout {timeout_secs}s, {attempts} attempt(s)",
        config.name_servers().len()
    );

    TokioAsyncResolver::tokio(config, opts)
}
