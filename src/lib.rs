//! The ipgrep library: the driver side of IP literal extraction.
//!
//! Tokenizing and validating live in the [`ip_scan`] crate. This crate opens the named
//! inputs, scans them concurrently and reports the results.
//!
//! # Examples
//!
//! Scanning two files and printing the report the way the `ipgrep` binary does:
//!
//! ```rust,no_run
//! use ipgrep::{files, input, Report, Scanner};
//! use termcolor::{ColorChoice, StandardStream};
//!
//! # fn main() -> anyhow::Result<()> {
//! let scanner = Scanner::new()?;
//! let sources = input::open_all(&["access.log", "config.json"])?;
//! let report = Report::new(files::scan_sources(&scanner, sources));
//!
//! report.write_results(&mut std::io::stdout())?;
//! report.write_errors(&mut StandardStream::stderr(ColorChoice::Auto))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod files;
pub mod input;
pub mod report;

pub use crate::error::{Error, Result};
pub use crate::report::Report;
pub use ip_scan::{ScanError, ScanResult, Scanner};
