use camino::Utf8PathBuf;

/// Errors that stop an ipgrep run before any output is produced.
///
/// Problems reading an already opened source are not in here; those are recorded per
/// source as [`ip_scan::ScanError`] and reported after all results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A named input could not be opened.
    #[error("{path}")]
    Open {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scanner could not be built.
    #[error(transparent)]
    Scanner(#[from] ip_scan::Error),
}

/// Convenience type alias for Results using the library error.
pub type Result<T> = std::result::Result<T, Error>;
