//! End-to-end presence check for one email

use crate::parser::normalize_output;
use crate::runner::Runner;
use crate::types::Normalized;
use tracing::{debug, warn};

/// Run the scanning tool for `email` and normalize what it printed.
///
/// Never fails: a tool that cannot be launched, exits non-zero, or prints
/// undecodable output yields an empty result carrying the failure.
#[must_use]
pub fn check_email<R: Runner + ?Sized>(runner: &R, email: &str) -> Normalized {
    let normalized = match runner.run(email) {
        Ok(output) => normalize_output(&output),
        Err(e) => Normalized::failed(e),
    };

    if let Some(diagnostic) = normalized.diagnostic() {
        warn!("{diagnostic}");
    } else {
        debug!(
            "Checked {email}: {} services, {} accounts found",
            normalized.results.len(),
            normalized.found_count()
        );
    }

    normalized
}
