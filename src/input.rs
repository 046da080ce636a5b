use std::fs;
use std::path::Path;

use memmap2::Mmap;

use crate::error::StriderError;

/// A text loaded for searching. Files are memory-mapped so large inputs are
/// scanned without a copy; inline and piped text is owned.
pub enum Text {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl Text {
    /// Load a file for searching.
    pub fn from_file(path: &Path) -> Result<Self, StriderError> {
        let io_err = |e| StriderError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let meta = fs::metadata(path).map_err(io_err)?;

        // Empty check before mmap — mmap on a 0-byte file may fail on some
        // platforms. An empty text is still searchable (every pattern is
        // too long for it).
        if meta.len() == 0 {
            return Ok(Self::Owned(Vec::new()));
        }

        let file = fs::File::open(path).map_err(io_err)?;
        let mmap = unsafe { Mmap::map(&file) }.map_err(io_err)?;
        Ok(Self::Mapped(mmap))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Owned(buf) => buf,
            Self::Mapped(mmap) => mmap,
        }
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Self::Owned(s.into_bytes())
    }
}

impl From<Vec<u8>> for Text {
    fn from(buf: Vec<u8>) -> Self {
        Self::Owned(buf)
    }
}
