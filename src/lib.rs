// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Account Presence Normalizer
//!
//! Runs an external account-enumeration tool (holehe) against one email
//! address and turns its console output into strongly-typed records.
//!
//! # Output rules
//!
//! - Lines carrying `[+]` or `[-]` become one record each, in order
//! - The service name is the second whitespace-separated token
//! - `Email recovery:` / `Phone number:` hints are lifted into fields
//! - Any failure collapses the run to an empty list plus a diagnostic
//!
//! # Example
//!
//! ```rust
//! use email_presence::normalize;
//!
//! let stdout = "[+] twitter.com\n[-] github.com\n[+] instagram.com Phone number: +1555\n";
//! let normalized = normalize(stdout, false, "");
//!
//! assert_eq!(normalized.results.len(), 3);
//! assert!(normalized.results[0].exists);
//! assert_eq!(normalized.results[2].phone_number.as_deref(), Some("+1555"));
//! assert!(normalized.diagnostic().is_none());
//! ```

mod check;
mod error;
mod fields;
mod node;
mod parser;
mod runner;
mod types;

pub use check::check_email;
pub use error::{CheckError, Result};
pub use fields::{email_recovery, phone_number};
pub use node::*;
pub use parser::{normalize, normalize_output, parse_line, parse_output};
pub use runner::*;
pub use types::*;
