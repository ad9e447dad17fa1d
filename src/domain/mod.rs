//! The domain under analysis.
//!
//! A `Domain` is accepted as typed by the operator: surrounding whitespace is
//! trimmed and empty input is rejected, but nothing is checked against RFC
//! syntax. Malformed names simply fail to resolve.

use std::fmt;

use serde::Serialize;

use crate::error_handling::DomainError;

/// A non-empty domain name, immutable once accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Accepts `input` as the domain to analyze.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Empty` if `input` is empty or only whitespace.
    pub fn new(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The domain exactly as it is sent to the resolver.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File-name-safe form: every character that is not ASCII alphanumeric becomes `_`.
    ///
    /// `example.com` becomes `example_com`.
    pub fn file_stem(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
