//! Normalization of raw scanning tool output into service records

use crate::error::{CheckError, Result};
use crate::fields;
use crate::runner::RunOutput;
use crate::types::{Marker, Normalized, ServiceCheckResult};
use tracing::{debug, trace};

/// Normalize captured tool output.
///
/// A failed run yields no records and a diagnostic built from `raw_stderr`;
/// stdout is not inspected in that case.
#[must_use]
pub fn normalize(raw_stdout: &str, run_failed: bool, raw_stderr: &str) -> Normalized {
    if run_failed {
        return Normalized::failed(CheckError::ToolExecution {
            exit_code: None,
            stderr: raw_stderr.trim().to_string(),
        });
    }

    Normalized::success(parse_output(raw_stdout))
}

/// Normalize a captured run straight from its raw bytes.
///
/// Stdout that is not valid UTF-8 collapses the whole run to an empty
/// result; no partial record list is ever returned.
#[must_use]
pub fn normalize_output(output: &RunOutput) -> Normalized {
    if output.run_failed() {
        return Normalized::failed(CheckError::ToolExecution {
            exit_code: Some(output.exit_code),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    match decode_stdout(&output.stdout) {
        Ok(text) => Normalized::success(parse_output(text)),
        Err(e) => Normalized::failed(e),
    }
}

fn decode_stdout(raw: &[u8]) -> Result<&str> {
    std::str::from_utf8(raw).map_err(|e| CheckError::Decode(e.to_string()))
}

/// Parse every line of tool output, keeping source order
#[must_use]
pub fn parse_output(text: &str) -> Vec<ServiceCheckResult> {
    let results: Vec<ServiceCheckResult> = text.lines().filter_map(parse_line).collect();

    debug!(
        "Parsed {} service records ({} found)",
        results.len(),
        results.iter().filter(|r| r.exists).count()
    );

    results
}

/// Parse a single line of tool output.
///
/// Returns `None` for lines without a marker and for lines with fewer than
/// two whitespace-separated tokens.
#[must_use]
pub fn parse_line(line: &str) -> Option<ServiceCheckResult> {
    let marker = Marker::detect(line)?;

    // The marker keeps its own token slot; the service is always index 1.
    let Some(name) = line.split_whitespace().nth(1) else {
        trace!("Skipping marker line without service name: {line:?}");
        return None;
    };

    Some(ServiceCheckResult {
        name: name.to_string(),
        exists: marker.exists(),
        email_recovery: fields::email_recovery(line),
        phone_number: fields::phone_number(line),
        others: None,
        rate_limited: false,
    })
}
