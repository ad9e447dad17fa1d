//! Interactive domain prompt.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::config::DOMAIN_PROMPT;
use crate::domain::Domain;

/// Asks for the domain on `output` and reads one line from `input`.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written, stdin cannot be read, or
/// the answer is empty (`DomainError::Empty`).
pub fn prompt_for_domain<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Domain> {
    output
        .write_all(DOMAIN_PROMPT.as_bytes())
        .and_then(|()| output.flush())
        .context("Failed to write domain prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read domain from input")?;

    Ok(Domain::new(&line)?)
}
