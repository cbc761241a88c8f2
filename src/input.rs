use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};

use crate::error::{Error, Result};

/// A source that can be either a file or stdin.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub enum FileOrStdin {
    /// Input from a file.
    File(Utf8PathBuf),
    /// Input from stdin.
    #[default]
    Stdin,
}

impl fmt::Display for FileOrStdin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOrStdin::File(path) => write!(f, "{}", path),
            FileOrStdin::Stdin => write!(f, "<stdin>"),
        }
    }
}

impl FileOrStdin {
    /// Create a new FileOrStdin from a path.
    ///
    /// If the path is "-", stdin is used.
    pub fn from_path(path: Utf8PathBuf) -> Self {
        if path.as_str() == "-" {
            FileOrStdin::Stdin
        } else {
            FileOrStdin::File(path)
        }
    }

    /// Open the input, keeping its display name alongside the reader.
    pub fn open(&self) -> Result<Source> {
        let reader = match self {
            FileOrStdin::File(path) => {
                let file = File::open(path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                InputReader::File(file)
            }
            FileOrStdin::Stdin => InputReader::Stdin(io::stdin()),
        };
        Ok(Source {
            name: self.to_string(),
            reader,
        })
    }
}

/// A reader for input from either a file or stdin.
#[derive(Debug)]
pub enum InputReader {
    File(File),
    Stdin(io::Stdin),
}

impl Read for InputReader {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputReader::File(rdr) => rdr.read(buf),
            InputReader::Stdin(rdr) => rdr.read(buf),
        }
    }
}

/// An opened input, ready to be scanned.
///
/// The reader is closed when the `Source` is dropped.
#[derive(Debug)]
pub struct Source {
    pub name: String,
    pub reader: InputReader,
}

/// Open every path in order.
///
/// Stops at the first path that cannot be opened. Sources opened before it are
/// dropped (and closed) along with the partial list.
pub fn open_all<P: AsRef<Utf8Path>>(paths: &[P]) -> Result<Vec<Source>> {
    paths
        .iter()
        .map(|path| FileOrStdin::from_path(path.as_ref().to_owned()).open())
        .collect()
}
