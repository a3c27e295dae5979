//! Extraction of recovery hints embedded in tool output lines

use regex::Regex;

// Matched against the original line, never a lowercased copy: offsets must
// index the original bytes.
static EMAIL_RECOVERY_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)email recovery:").unwrap());

static PHONE_NUMBER_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)phone number:").unwrap());

/// Recovery email hint following an `email recovery:` anchor
#[must_use]
pub fn email_recovery(line: &str) -> Option<String> {
    value_after_last(&EMAIL_RECOVERY_REGEX, line)
}

/// Recovery phone hint following a `phone number:` anchor
#[must_use]
pub fn phone_number(line: &str) -> Option<String> {
    value_after_last(&PHONE_NUMBER_REGEX, line)
}

/// Trimmed remainder of `line` after the last match of `anchor`
fn value_after_last(anchor: &Regex, line: &str) -> Option<String> {
    anchor
        .find_iter(line)
        .last()
        .map(|m| line[m.end()..].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_after_last_uses_final_anchor() {
        let line = "[+] x phone number: 1 phone number: 2";
        assert_eq!(phone_number(line).as_deref(), Some("2"));
    }

    #[test]
    fn test_non_ascii_prefix_keeps_offsets() {
        // U+0130 lowercases to a longer sequence
        let line = "[+] İİİ Email Recovery: a*****@gmail.com";
        assert_eq!(email_recovery(line).as_deref(), Some("a*****@gmail.com"));
    }
}
