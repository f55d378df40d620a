//! Error types for dystros.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, extracting or ordering calendar data.
#[derive(Error, Debug)]
pub enum DystrosError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ICS parse error{}: {message}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    IcsParse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("Component '{}' has no {field}", summary.as_deref().unwrap_or("(No title)"))]
    MissingField {
        field: &'static str,
        summary: Option<String>,
    },
}

impl DystrosError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DystrosError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        DystrosError::IcsParse {
            path: None,
            message: message.into(),
        }
    }

    /// Attach the file a parse error came from.
    pub(crate) fn in_file(self, file: impl Into<PathBuf>) -> Self {
        match self {
            DystrosError::IcsParse { path: None, message } => DystrosError::IcsParse {
                path: Some(file.into()),
                message,
            },
            other => other,
        }
    }
}

/// Result type alias for dystros operations.
pub type DystrosResult<T> = Result<T, DystrosError>;
