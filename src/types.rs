//! Core types for normalized scan results

use crate::error::CheckError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one service for the target email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCheckResult {
    /// Service identifier as printed by the tool (e.g., "twitter.com")
    pub name: String,

    /// Whether an account is registered with the email
    pub exists: bool,

    /// Partially masked recovery email, if the tool revealed one
    #[serde(alias = "emailrecovery")]
    pub email_recovery: Option<String>,

    /// Partially masked recovery phone number, if the tool revealed one
    pub phone_number: Option<String>,

    /// Reserved; never populated by the line parser
    pub others: Option<String>,

    /// Reserved for throttling detection; never set by the line parser
    #[serde(rename = "rateLimit")]
    pub rate_limited: bool,
}

impl ServiceCheckResult {
    #[must_use]
    pub fn new(name: impl Into<String>, exists: bool) -> Self {
        Self {
            name: name.into(),
            exists,
            email_recovery: None,
            phone_number: None,
            others: None,
            rate_limited: false,
        }
    }

    /// Check if the tool revealed any recovery hint for this account
    #[must_use]
    pub const fn has_recovery_hint(&self) -> bool {
        self.email_recovery.is_some() || self.phone_number.is_some()
    }
}

impl fmt::Display for ServiceCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.exists {
            Marker::Positive
        } else {
            Marker::Negative
        };
        write!(f, "{marker} {}", self.name)
    }
}

/// Per-line registration marker printed by the scanning tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `[+]`: account found
    Positive,
    /// `[-]`: no account
    Negative,
}

impl Marker {
    pub const POSITIVE_TOKEN: &'static str = "[+]";
    pub const NEGATIVE_TOKEN: &'static str = "[-]";

    /// Detect the marker governing a line.
    ///
    /// Substring membership, not token equality. A line carrying both
    /// markers is treated as positive.
    #[must_use]
    pub fn detect(line: &str) -> Option<Self> {
        if line.contains(Self::POSITIVE_TOKEN) {
            Some(Self::Positive)
        } else if line.contains(Self::NEGATIVE_TOKEN) {
            Some(Self::Negative)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => Self::POSITIVE_TOKEN,
            Self::Negative => Self::NEGATIVE_TOKEN,
        }
    }

    #[must_use]
    pub const fn exists(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of normalizing one run of the scanning tool
#[derive(Debug, Default)]
pub struct Normalized {
    /// Records in source line order; empty whenever `failure` is set
    pub results: Vec<ServiceCheckResult>,

    /// Why the run collapsed to an empty result, if it did
    pub failure: Option<CheckError>,
}

impl Normalized {
    #[must_use]
    pub const fn success(results: Vec<ServiceCheckResult>) -> Self {
        Self {
            results,
            failure: None,
        }
    }

    #[must_use]
    pub const fn failed(error: CheckError) -> Self {
        Self {
            results: Vec::new(),
            failure: Some(error),
        }
    }

    /// Operator-facing text describing the failure, if any
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        self.failure.as_ref().map(ToString::to_string)
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Number of services on which an account was found
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.results.iter().filter(|r| r.exists).count()
    }
}
