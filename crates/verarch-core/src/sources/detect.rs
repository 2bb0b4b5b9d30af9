//! Source kind detection.

use std::path::Path;

/// The kind of source an input argument names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// ZIP archive.
    Zip,
    /// Tar archive (uncompressed).
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
    /// Tar stream read from standard input.
    TarStdin,
    /// Directory tree.
    Dir,
}

/// Detects the source kind from an input argument.
///
/// Rules, in order: `-` or an empty argument means a tar stream on standard
/// input; a `.zip` extension (case-insensitive) selects the zip reader; an
/// existing directory is traversed as a tree; `.tar.gz`/`.tgz` select the
/// gzip-decoded tar reader; anything else is treated as a plain tar file.
///
/// # Examples
///
/// ```
/// use verarch_core::sources::SourceKind;
/// use verarch_core::sources::detect_source;
///
/// assert_eq!(detect_source("release.ZIP"), SourceKind::Zip);
/// assert_eq!(detect_source("release.tar.gz"), SourceKind::TarGz);
/// assert_eq!(detect_source("-"), SourceKind::TarStdin);
/// assert_eq!(detect_source("backup.tar"), SourceKind::Tar);
/// ```
#[must_use]
pub fn detect_source(input: &str) -> SourceKind {
    if input.is_empty() || input == "-" {
        return SourceKind::TarStdin;
    }

    let path = Path::new(input);
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    if extension.as_deref() == Some("zip") {
        return SourceKind::Zip;
    }
    if path.is_dir() {
        return SourceKind::Dir;
    }

    match extension.as_deref() {
        Some("tgz") => SourceKind::TarGz,
        Some("gz")
            if path
                .file_stem()
                .is_some_and(|stem| stem.to_string_lossy().ends_with(".tar")) =>
        {
            SourceKind::TarGz
        }
        _ => SourceKind::Tar,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_stdin() {
        assert_eq!(detect_source("-"), SourceKind::TarStdin);
        assert_eq!(detect_source(""), SourceKind::TarStdin);
    }

    #[test]
    fn test_detect_zip_case_insensitive() {
        assert_eq!(detect_source("a.zip"), SourceKind::Zip);
        assert_eq!(detect_source("A.ZIP"), SourceKind::Zip);
        assert_eq!(detect_source("a.Zip"), SourceKind::Zip);
    }

    #[test]
    fn test_detect_tar_gz() {
        assert_eq!(detect_source("a.tar.gz"), SourceKind::TarGz);
        assert_eq!(detect_source("a.tgz"), SourceKind::TarGz);
    }

    #[test]
    fn test_plain_gz_is_not_tar_gz() {
        // A bare .gz without a .tar stem falls through to the tar reader,
        // which will fail loudly on a non-tar stream.
        assert_eq!(detect_source("a.gz"), SourceKind::Tar);
    }

    #[test]
    fn test_detect_tar_fallback() {
        assert_eq!(detect_source("a.tar"), SourceKind::Tar);
        assert_eq!(detect_source("backup"), SourceKind::Tar);
        assert_eq!(detect_source("weird.bin"), SourceKind::Tar);
    }

    #[test]
    fn test_detect_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let arg = temp.path().to_string_lossy().into_owned();
        assert_eq!(detect_source(&arg), SourceKind::Dir);
    }

    #[test]
    fn test_zip_extension_wins_over_directory() {
        // A directory named like a zip archive still routes to the zip reader
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("odd.zip");
        std::fs::create_dir(&dir).unwrap();
        assert_eq!(
            detect_source(&dir.to_string_lossy()),
            SourceKind::Zip
        );
    }
}
