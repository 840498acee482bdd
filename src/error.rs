use std::path::PathBuf;

/// Every error seekbench can produce. Displayed as user-facing messages.
#[derive(Debug)]
pub enum SeekError {
    NotFound {
        path: PathBuf,
    },
    PermissionDenied {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        reason: String,
    },
    InvalidConfig {
        reason: String,
    },
    InvalidQuery {
        query: String,
        reason: String,
    },
    EmptyCorpus {
        path: PathBuf,
        glob: String,
    },
    /// Matchers (or the oracle) returned different offsets for the same input.
    Disagreement {
        document: String,
        pattern: String,
        results: String,
    },
}

impl SeekError {
    /// Classify an I/O error against the path it happened on.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::IoError { path, source },
        }
    }

    /// Process exit code for the CLI.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::IoError { .. } => 2,
            Self::InvalidQuery { .. } | Self::InvalidConfig { .. } | Self::ParseError { .. } => 3,
            Self::PermissionDenied { .. } => 4,
            Self::Disagreement { .. } => 5,
            Self::EmptyCorpus { .. } => 6,
        }
    }
}

impl std::fmt::Display for SeekError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "not found: {}", path.display()),
            Self::PermissionDenied { path } => {
                write!(f, "{} [permission denied]", path.display())
            }
            Self::IoError { path, source } => write!(f, "{}: {source}", path.display()),
            Self::ParseError { path, reason } => {
                write!(f, "parse error in {}: {reason}", path.display())
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::InvalidQuery { query, reason } => {
                write!(f, "invalid query \"{query}\": {reason}")
            }
            Self::EmptyCorpus { path, glob } => {
                write!(f, "no documents matching \"{glob}\" in {}", path.display())
            }
            Self::Disagreement {
                document,
                pattern,
                results,
            } => {
                write!(
                    f,
                    "matchers disagree on {document} for \"{}\": {results}",
                    abbreviate(pattern, 40)
                )
            }
        }
    }
}

impl std::error::Error for SeekError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Shorten long patterns for one-line messages. Cuts on a char boundary.
pub(crate) fn abbreviate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &s[..cut]),
        None => s.to_string(),
    }
}
