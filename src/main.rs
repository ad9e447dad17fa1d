//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_report` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - The interactive domain prompt
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use dns_report::config::Opt;
use dns_report::initialization::init_logger_with;
use dns_report::prompt::prompt_for_domain;
use dns_report::{run_report, Domain};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine; RUST_LOG may also come from the shell
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    let domain = match opt.domain.as_deref() {
        Some(arg) => Domain::new(arg).map_err(anyhow::Error::from),
        None => prompt_for_domain(&mut io::stdin().lock(), &mut io::stdout()),
    };
    let domain = match domain {
        Ok(domain) => domain,
        Err(e) => {
            eprintln!("{e:#}. Exiting.");
            process::exit(1);
        }
    };

    let config = opt.into_config(domain.to_string());
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    println!("Collecting DNS records for {domain}...");
    match run_report(config).await {
        Ok(summary) => {
            println!(
                "✅ Found {} record{} for {} in {:.1}s",
                summary.records_found,
                if summary.records_found == 1 { "" } else { "s" },
                summary.domain,
                summary.elapsed_seconds
            );
            if !summary.empty_types.is_empty() {
                let empty: Vec<String> = summary.empty_types.iter().map(|t| t.to_string()).collect();
                println!("No records found for: {}", empty.join(", "));
            }
            println!("Report written to {}", summary.report_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("dns_report error: {:#}", e);
            process::exit(1);
        }
    }
}
