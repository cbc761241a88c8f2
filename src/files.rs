use ip_scan::{ScanResult, Scanner};
use rayon::prelude::*;

use crate::input::Source;

/// Scan each source on its own task and wait for all of them.
///
/// Tasks share nothing but the read-only `scanner`; each one owns its source and closes
/// it when the scan finishes. Results are returned in the same order as `sources`, no
/// matter which task finishes first.
pub fn scan_sources(scanner: &Scanner, sources: Vec<Source>) -> Vec<ScanResult> {
    sources
        .into_par_iter()
        .map(|source| scanner.scan(source.name, source.reader))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::open_all;

    #[test]
    fn results_follow_argument_order() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");
        let paths: Vec<String> = ["json.txt", "empty.txt", "url.txt", "json.txt"]
            .iter()
            .map(|name| format!("{}/{}", dir, name))
            .collect();

        let scanner = Scanner::new().unwrap();
        let results = scan_sources(&scanner, open_all(&paths).unwrap());

        let names: Vec<&str> = results.iter().map(|r| r.source()).collect();
        assert_eq!(names, paths.iter().map(String::as_str).collect::<Vec<_>>());
        assert!(results[0].is_ok());
        assert!(!results[1].is_ok());
        assert_eq!(results[2].addresses().len(), 1);
    }
}
