use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input, MatchKind};
use regex_syntax::hir::Hir;

use crate::Result;

/// A maximal run of delimiter code points.
///
/// Delimiters are Unicode whitespace, Unicode punctuation (general category `P`) and
/// ASCII punctuation/symbols (`[:punct:]`, which also covers `=`, `+`, `<`, `>`, `|`,
/// `~`, `^`, `$` and backtick). `.` and `:` are carved out of the delimiter set since
/// they separate octets and groups inside addresses.
///
/// Tokens are the gaps between these runs. Bytes that are not valid UTF-8 can never
/// match a delimiter, so they stay inside whatever token surrounds them.
static DELIMITER_PATTERN: &str = r"[[\s\p{P}[:punct:]]--[.:]]+";

/// Splits byte buffers into candidate address tokens.
///
/// The tokenizer only knows about delimiters, not addresses: `...` and `::::` are
/// emitted like any other word and left for the validator to reject.
///
/// A `Tokenizer` is cheap to share. It is `Send + Sync`, and all scanning state lives
/// in the iterator returned by [`Tokenizer::tokenize`].
#[derive(Clone, Debug)]
pub struct Tokenizer {
    delimiters: Regex,
}

impl Tokenizer {
    /// Compile the delimiter pattern.
    ///
    /// # Errors
    ///
    /// Returns an error only if the built-in pattern fails to parse or compile.
    pub fn new() -> Result<Tokenizer> {
        let hir: Hir = regex_syntax::Parser::new().parse(DELIMITER_PATTERN)?;
        let delimiters = Regex::builder()
            .configure(
                Regex::config()
                    .auto_prefilter(true)
                    .match_kind(MatchKind::LeftmostFirst),
            )
            .build_from_hir(&hir)?;
        Ok(Tokenizer { delimiters })
    }

    /// Return the candidate tokens of `haystack`, left to right.
    ///
    /// Leading, trailing and repeated delimiters collapse; empty tokens are never
    /// produced.
    ///
    /// # Example
    ///
    /// ```
    /// use ip_scan::Tokenizer;
    ///
    /// # fn main() -> Result<(), ip_scan::Error> {
    /// let tokenizer = Tokenizer::new()?;
    /// let words: Vec<&[u8]> = tokenizer.tokenize(b"addr=10.0.0.1, time=13:10").collect();
    /// assert_eq!(words, vec![&b"addr"[..], b"10.0.0.1", b"time", b"13:10"]);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn tokenize<'a>(&'a self, haystack: &'a [u8]) -> impl Iterator<Item = &'a [u8]> + 'a {
        let mut runs = self.delimiters.find_iter(haystack);
        let mut start = 0;
        let mut done = false;

        std::iter::from_fn(move || {
            while !done {
                let (from, to) = match runs.next() {
                    Some(m) => {
                        let gap = (start, m.start());
                        start = m.end();
                        gap
                    }
                    None => {
                        done = true;
                        (start, haystack.len())
                    }
                };
                if from < to {
                    return Some(&haystack[from..to]);
                }
            }
            None
        })
    }

    /// Report whether `c` separates tokens.
    pub fn is_delimiter(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        let encoded = c.encode_utf8(&mut buf);
        let input = Input::new(encoded.as_bytes()).anchored(Anchored::Yes);
        self.delimiters.is_match(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        let tokenizer = Tokenizer::new().unwrap();
        tokenizer
            .tokenize(input.as_bytes())
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    #[test]
    fn whitespace_and_punctuation_split() {
        assert_eq!(
            words("10.10.10.2 https://webserver.com"),
            vec!["10.10.10.2", "https:", "webserver.com"]
        );
        assert_eq!(words(r#"{"ip": "172.16.2.84"}"#), vec!["ip:", "172.16.2.84"]);
    }

    #[test]
    fn ascii_symbols_split() {
        assert_eq!(
            words("log -> addr=192.168.0.2|x+y~z"),
            vec!["log", "addr", "192.168.0.2", "x", "y", "z"]
        );
    }

    #[test]
    fn dots_and_colons_are_kept() {
        assert_eq!(words("... :::: a.b:c"), vec!["...", "::::", "a.b:c"]);
    }

    #[test]
    fn delimiters_collapse() {
        assert!(words("").is_empty());
        assert!(words(" \t\r\n,;()[]{}").is_empty());
        assert_eq!(words(",,,a,,,b,,,"), vec!["a", "b"]);
    }

    #[test]
    fn unicode_delimiters() {
        // U+2019 RIGHT SINGLE QUOTATION MARK, U+00A0 NO-BREAK SPACE, U+2014 EM DASH
        assert_eq!(
            words("There\u{2019}s\u{a0}8.8.8.8\u{2014}ok"),
            vec!["There", "s", "8.8.8.8", "ok"]
        );
    }

    #[test]
    fn letters_are_not_delimiters() {
        assert_eq!(words("caf\u{e9}1.2.3.4"), vec!["caf\u{e9}1.2.3.4"]);
    }

    #[test]
    fn invalid_utf8_stays_in_the_token() {
        let tokenizer = Tokenizer::new().unwrap();
        let got: Vec<&[u8]> = tokenizer.tokenize(b"1.2.3.4\xff5.6.7.8").collect();
        assert_eq!(got, vec![&b"1.2.3.4\xff5.6.7.8"[..]]);

        let got: Vec<&[u8]> = tokenizer
            .tokenize(b"\xff10.0.0.1 x\xc3(192.168.0.1\xfe")
            .collect();
        assert_eq!(got, vec![&b"\xff10.0.0.1"[..], b"x\xc3", b"192.168.0.1\xfe"]);
        assert!(!tokenizer.is_delimiter('\u{fffd}'));
    }

    #[test]
    fn delimiter_predicate() {
        let tokenizer = Tokenizer::new().unwrap();
        for c in [' ', '\t', '\n', ',', ';', '"', '\'', '=', '-', '/', '_', '\u{2019}'] {
            assert!(tokenizer.is_delimiter(c), "{:?} should split", c);
        }
        for c in ['.', ':', 'a', 'F', '0', '9', 'z', '\u{e9}'] {
            assert!(!tokenizer.is_delimiter(c), "{:?} should not split", c);
        }
    }
}
