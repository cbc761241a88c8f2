use std::fmt;
use std::io::{self, Write};
use std::net::IpAddr;

use ip_scan::ScanResult;
use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

/// Program name used as the prefix of every error line.
pub const PROG: &str = "ipgrep";

/// Scan results split into the ones to print and the ones to complain about.
///
/// Both groups keep the order the results were collected in.
#[derive(Debug)]
pub struct Report {
    succeeded: Vec<ScanResult>,
    failed: Vec<ScanResult>,
}

impl Report {
    pub fn new(results: Vec<ScanResult>) -> Report {
        let (succeeded, failed) = results.into_iter().partition(ScanResult::is_ok);
        Report { succeeded, failed }
    }

    #[inline]
    pub fn succeeded(&self) -> &[ScanResult] {
        &self.succeeded
    }

    #[inline]
    pub fn failed(&self) -> &[ScanResult] {
        &self.failed
    }

    /// Write a `# results for <source>:` block per successful source.
    ///
    /// Each block lists one address per line and ends with a blank line. A source
    /// without any address still gets its header.
    pub fn write_results<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for result in &self.succeeded {
            writeln!(out, "# results for {}:", result.source())?;
            for addr in result.addresses() {
                writeln!(out, "{}", addr)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Write the `# errors:` section, if there is anything to put in it.
    pub fn write_errors<W: WriteColor>(&self, err: &mut W) -> io::Result<()> {
        if self.failed.is_empty() {
            return Ok(());
        }
        writeln!(err, "# errors:")?;
        for result in &self.failed {
            if let Some(cause) = result.error() {
                write_error(err, format_args!("{}: {}", result.source(), cause))?;
            }
        }
        Ok(())
    }

    /// Write one JSON object per line for every source, successes first.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for result in self.succeeded.iter().chain(&self.failed) {
            serde_json::to_writer(&mut *out, &JsonRecord::from(result))?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    source: &'a str,
    addresses: &'a [IpAddr],
    error: Option<String>,
}

impl<'a> From<&'a ScanResult> for JsonRecord<'a> {
    fn from(result: &'a ScanResult) -> Self {
        JsonRecord {
            source: result.source(),
            addresses: result.addresses(),
            error: result.error().map(|e| e.to_string()),
        }
    }
}

/// Write a single `ipgrep: error: <msg>` line, in red when `w` supports color.
pub fn write_error<W: WriteColor>(w: &mut W, msg: impl fmt::Display) -> io::Result<()> {
    w.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
    write!(w, "{}: error: {}", PROG, msg)?;
    w.reset()?;
    writeln!(w)
}
