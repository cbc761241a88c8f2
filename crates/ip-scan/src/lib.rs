//! Word-level IPv4 and IPv6 literal scanning.
//!
//! `ip-scan` pulls address literals out of arbitrary text in two steps:
//!
//! - **Tokenize**: the buffer is split into candidate "words" on whitespace and on
//!   punctuation other than `.` and `:` (those two appear inside addresses).
//! - **Validate**: every word is tested against the full IPv4 / IPv6 literal grammar.
//!   A word either *is* an address from its first byte to its last, or it is dropped.
//!
//! There is no partial matching: `127.0.0.1.` at the end of a sentence is a single word
//! that is not an address, so nothing is extracted from it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ip_scan::Scanner;
//!
//! # fn main() -> Result<(), ip_scan::Error> {
//! let scanner = Scanner::new()?;
//!
//! let input = br#"{"ip": "172.16.2.84", "peer": "2001:DB8::1"}"#;
//! for addr in scanner.extract(input) {
//!     println!("Found: {}", addr);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Scanning a source
//!
//! [`Scanner::scan`] consumes a reader and produces a [`ScanResult`]. Read failures and
//! empty inputs are reported on the result instead of aborting, so many sources can be
//! scanned independently and reported together:
//!
//! ```no_run
//! use ip_scan::Scanner;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scanner = Scanner::new()?;
//! let file = std::fs::File::open("access.log")?;
//! let result = scanner.scan("access.log", file);
//!
//! match result.error() {
//!     Some(err) => eprintln!("{}: {}", result.source(), err),
//!     None => {
//!         for addr in result.addresses() {
//!             println!("{}", addr);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Strictness
//!
//! IPv4 octets are decimal 0-255 with no leading zeros (`010.0.0.1` is rejected rather
//! than guessed at as octal or decimal). IPv6 follows the RFC 4291 text form: eight
//! groups of one to four hex digits, at most one `::`, and an optional dotted-quad tail.
//! Zone identifiers, brackets and prefix lengths are not part of a literal.

mod scan;
mod tokenize;
mod validate;

pub use scan::{ScanError, ScanResult, Scanner};
pub use tokenize::Tokenizer;
pub use validate::{parse_ipv4_bytes, parse_ipv6_bytes, validate};

/// Errors raised while preparing a [`Scanner`] or [`Tokenizer`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The candidate-token pattern failed to parse.
    #[error("invalid token pattern: {0}")]
    Syntax(#[from] regex_syntax::Error),

    /// The candidate-token pattern failed to compile.
    #[error("regex error: {0}")]
    Regex(#[from] regex_automata::meta::BuildError),
}

/// Convenience type alias for Results using the library error.
pub type Result<T> = std::result::Result<T, Error>;
