//! Error types for clientdocs.
//!
//! Library crates use [`ClientDocsError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` and maps missing prerequisites to an exit code.

use std::path::PathBuf;

/// Top-level error type for all clientdocs operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientDocsError {
    /// The generated client docs directory does not exist.
    #[error("Client documentation directory not found: {}", path.display())]
    SourceMissing { path: PathBuf, prerequisite: String },

    /// The generated client docs directory holds no markdown files.
    #[error("No markdown files found in: {}", path.display())]
    NoMarkdownFiles { path: PathBuf, prerequisite: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ClientDocsError>;

impl ClientDocsError {
    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The external step that has to run before generation can succeed, if any.
    pub fn prerequisite(&self) -> Option<&str> {
        match self {
            Self::SourceMissing { prerequisite, .. }
            | Self::NoMarkdownFiles { prerequisite, .. } => Some(prerequisite.as_str()),
            Self::Io { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = ClientDocsError::SourceMissing {
            path: PathBuf::from("api-client/docs"),
            prerequisite: ". ./scripts/generate-api-client.ps1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Client documentation directory not found: api-client/docs"
        );
        assert_eq!(err.prerequisite(), Some(". ./scripts/generate-api-client.ps1"));
    }

    #[test]
    fn io_error_has_no_prerequisite() {
        let err = ClientDocsError::io(
            "docs/api-client/index.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("index.md"));
        assert!(err.prerequisite().is_none());
    }
}
