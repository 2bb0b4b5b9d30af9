//! Error conversion utilities for CLI.
//!
//! Converts verarch-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use verarch_core::VerifyError;

/// Converts `VerifyError` to a user-friendly anyhow error with context
pub fn convert_verify_error(err: VerifyError, input: &str) -> anyhow::Error {
    match err {
        VerifyError::PathEscape { path } => {
            anyhow!(
                "Security violation: source '{input}' carries entry name '{path}' that escapes the reference root\n\
                 HINT: This archive may be malicious. Do not verify archives from untrusted sources against sensitive trees."
            )
        }
        VerifyError::InvalidPath { path, reason } => {
            anyhow!(
                "Source '{input}' carries invalid entry name '{path}': {reason}\n\
                 HINT: Use --max-path-depth to raise the depth cap if the name is legitimate."
            )
        }
        VerifyError::ReferenceOpen { path, source } => {
            anyhow!(
                "{path}: cannot open reference file: {source}\n\
                 HINT: Is the reference directory (-C) the tree this source was built from?"
            )
        }
        VerifyError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{input}': {reason}\n\
                 HINT: The archive may be corrupted, truncated, or of a different format than its name suggests."
            )
        }
        VerifyError::UnsupportedFormat => {
            anyhow!(
                "Source format not supported: {input}\n\
                 HINT: Supported inputs: zip, tar, tar.gz, a directory, or '-' for tar on stdin."
            )
        }
        VerifyError::ReferenceWalk { path, source } => {
            anyhow!(
                "Failed to walk reference tree at '{}': {source}",
                path.display()
            )
        }
        VerifyError::Io(io_err) => {
            anyhow!("I/O error while processing '{input}': {io_err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_convert_path_escape_error() {
        let err = VerifyError::PathEscape {
            path: "../../../etc/passwd".to_string(),
        };
        let converted = convert_verify_error(err, "malicious.zip");
        let msg = format!("{converted:?}");
        assert!(msg.contains("escapes the reference root"));
        assert!(msg.contains("malicious.zip"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_reference_open_error() {
        let err = VerifyError::ReferenceOpen {
            path: "missing/file.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let converted = convert_verify_error(err, "backup.tar");
        let msg = format!("{converted:?}");
        assert!(msg.contains("missing/file.txt"));
        assert!(msg.contains("reference directory"));
    }

    #[test]
    fn test_convert_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = VerifyError::Io(io_err);
        let converted = convert_verify_error(err, "archive.tar.gz");
        let msg = format!("{converted:?}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("archive.tar.gz"));
    }
}
