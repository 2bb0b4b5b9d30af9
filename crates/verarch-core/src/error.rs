//! Error types for verification operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `VerifyError`.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Errors that can occur while verifying a source against a reference root.
///
/// A content mismatch is deliberately *not* an error: it is a classification
/// reported through [`crate::Event`] and recorded in [`crate::VerifyReport`].
/// Every variant here is fatal and aborts the run.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input kind could not be determined.
    #[error("unsupported source format")]
    UnsupportedFormat,

    /// Archive structure is corrupted or invalid.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Entry name escapes the reference root.
    #[error("entry path escapes reference root: {path}")]
    PathEscape {
        /// The offending entry name, as produced by the source.
        path: String,
    },

    /// Entry name is malformed in some other way.
    #[error("invalid entry path {path}: {reason}")]
    InvalidPath {
        /// The offending entry name.
        path: String,
        /// Why the name was rejected.
        reason: String,
    },

    /// A reference file named by the source could not be opened.
    ///
    /// This aborts the drive phase: a file the source claims to carry must be
    /// readable on the reference side. Files *absent* from the source are a
    /// post-walk classification, never an error.
    #[error("{path}: cannot open reference file: {source}")]
    ReferenceOpen {
        /// Normalized relative path of the entry.
        path: String,
        /// The underlying open failure.
        source: std::io::Error,
    },

    /// Reference-root traversal failed during the post-walk.
    #[error("reference walk failed at {path}: {source}")]
    ReferenceWalk {
        /// Path where the traversal failed.
        path: PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },
}

impl VerifyError {
    /// Returns `true` if this error was caused by a hostile or malformed
    /// entry name rather than by the machine's state.
    ///
    /// # Examples
    ///
    /// ```
    /// use verarch_core::VerifyError;
    ///
    /// let err = VerifyError::PathEscape {
    ///     path: "../etc/passwd".to_string(),
    /// };
    /// assert!(err.is_path_violation());
    ///
    /// let err = VerifyError::UnsupportedFormat;
    /// assert!(!err.is_path_violation());
    /// ```
    #[must_use]
    pub const fn is_path_violation(&self) -> bool {
        matches!(self, Self::PathEscape { .. } | Self::InvalidPath { .. })
    }

    /// Returns the relative entry path this error is attached to, if any.
    #[must_use]
    pub fn entry_path(&self) -> Option<&str> {
        match self {
            Self::PathEscape { path }
            | Self::InvalidPath { path, .. }
            | Self::ReferenceOpen { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VerifyError::UnsupportedFormat;
        assert_eq!(err.to_string(), "unsupported source format");
    }

    #[test]
    fn test_path_escape_error() {
        let err = VerifyError::PathEscape {
            path: "../etc/passwd".to_string(),
        };
        assert!(err.to_string().contains("escapes reference root"));
        assert!(err.to_string().contains("../etc/passwd"));
        assert!(err.is_path_violation());
    }

    #[test]
    fn test_reference_open_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = VerifyError::ReferenceOpen {
            path: "a/b.txt".to_string(),
            source: io_err,
        };
        let display = err.to_string();
        assert!(display.starts_with("a/b.txt:"));
        assert!(display.contains("cannot open reference file"));
        assert!(!err.is_path_violation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: VerifyError = io_err.into();
        assert!(matches!(err, VerifyError::Io(_)));
    }

    #[test]
    fn test_entry_path_accessor() {
        let err = VerifyError::InvalidPath {
            path: "bad\0name".to_string(),
            reason: "NUL byte".to_string(),
        };
        assert_eq!(err.entry_path(), Some("bad\0name"));

        let err = VerifyError::InvalidArchive("truncated".to_string());
        assert_eq!(err.entry_path(), None);
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "inner");
        let err = VerifyError::ReferenceOpen {
            path: "f".to_string(),
            source: io_err,
        };
        assert!(err.source().is_some());
    }
}
