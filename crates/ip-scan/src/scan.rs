use std::io::{self, Read};
use std::net::IpAddr;

use crate::tokenize::Tokenizer;
use crate::validate::validate;
use crate::Result;

/// Why a source produced no addresses at all.
///
/// A source full of text without any address in it is *not* an error; it simply has an
/// empty address list.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Reading the source failed after it was opened.
    #[error(transparent)]
    Read(#[from] io::Error),

    /// The source produced no bytes.
    #[error("empty file")]
    Empty,
}

/// The outcome of scanning one source.
///
/// Addresses are kept in the order their tokens appear in the source. Duplicates are
/// retained.
#[derive(Debug)]
pub struct ScanResult {
    source: String,
    outcome: std::result::Result<Vec<IpAddr>, ScanError>,
}

impl ScanResult {
    /// A successful scan with the given addresses.
    pub fn found<S: Into<String>>(source: S, addrs: Vec<IpAddr>) -> ScanResult {
        ScanResult {
            source: source.into(),
            outcome: Ok(addrs),
        }
    }

    /// A failed scan.
    pub fn failed<S: Into<String>>(source: S, err: ScanError) -> ScanResult {
        ScanResult {
            source: source.into(),
            outcome: Err(err),
        }
    }

    /// The name of the scanned source, e.g. a file path.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Addresses found in the source. Always empty for a failed scan.
    #[inline]
    pub fn addresses(&self) -> &[IpAddr] {
        match &self.outcome {
            Ok(addrs) => addrs,
            Err(_) => &[],
        }
    }

    /// The error that stopped this scan, if any.
    #[inline]
    pub fn error(&self) -> Option<&ScanError> {
        self.outcome.as_ref().err()
    }

    /// True when the source was read and was not empty, even if no address was found.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Consume the result, yielding the address list or the error.
    pub fn into_outcome(self) -> std::result::Result<Vec<IpAddr>, ScanError> {
        self.outcome
    }
}

/// Runs the tokenize-then-validate pipeline over whole sources.
///
/// A `Scanner` holds no per-scan state; one instance can serve any number of threads.
#[derive(Clone, Debug)]
pub struct Scanner {
    tokenizer: Tokenizer,
}

impl Scanner {
    /// Create a scanner with the default tokenizer.
    pub fn new() -> Result<Scanner> {
        Ok(Scanner::with_tokenizer(Tokenizer::new()?))
    }

    /// Build a scanner around an already compiled tokenizer.
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Scanner {
        Scanner { tokenizer }
    }

    /// The tokenizer this scanner splits input with.
    #[inline]
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Yield every address literal in `haystack`, in order of appearance.
    #[inline]
    pub fn extract<'a>(&'a self, haystack: &'a [u8]) -> impl Iterator<Item = IpAddr> + 'a {
        self.tokenizer.tokenize(haystack).filter_map(validate)
    }

    /// Read `reader` to the end and extract its addresses.
    ///
    /// The reader is owned by the scan and dropped before this returns, whether the
    /// read succeeded or not. A read failure or a source with zero bytes is recorded on
    /// the returned [`ScanResult`]; neither is propagated.
    pub fn scan<S, R>(&self, source: S, mut reader: R) -> ScanResult
    where
        S: Into<String>,
        R: Read,
    {
        let mut buf = Vec::new();
        let read = reader.read_to_end(&mut buf);
        drop(reader);

        if let Err(err) = read {
            return ScanResult::failed(source, ScanError::Read(err));
        }
        if buf.is_empty() {
            return ScanResult::failed(source, ScanError::Empty);
        }
        ScanResult::found(source, self.extract(&buf).collect())
    }
}
