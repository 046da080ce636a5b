use std::path::PathBuf;

/// Every error strider can produce. A completed search that finds nothing is
/// NOT an error — matchers return `Ok(None)` for that.
#[derive(Debug)]
pub enum StriderError {
    /// Pattern has no symbols. Rejected before any comparison.
    EmptyPattern,
    /// Pattern is longer than the text — no alignment fits.
    PatternTooLong { pattern: usize, text: usize },
    /// Reading the text input failed. Only the front end produces this;
    /// the matchers themselves never touch I/O.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for StriderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "invalid pattern: empty"),
            Self::PatternTooLong { pattern, text } => {
                write!(
                    f,
                    "invalid pattern: {pattern} symbols, but the text has only {text}"
                )
            }
            Self::Io { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StriderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::EmptyPattern | Self::PatternTooLong { .. } => None,
        }
    }
}

impl StriderError {
    /// Exit code for the CLI. 0 is found, 1 is not-found — both are
    /// completed searches and never reach here.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 2,
            Self::EmptyPattern | Self::PatternTooLong { .. } => 3,
        }
    }
}
