//! Reconciliation of an entry source against a reference root.
//!
//! The run has two phases. The drive phase walks the source: every entry is
//! normalized, recorded in the touched-path set, and compared byte for byte
//! against the file of the same relative path under the reference root. The
//! post-walk phase then sweeps the reference root and classifies every file
//! the source never produced.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::Event;
use crate::EventSink;
use crate::RelPath;
use crate::Result;
use crate::VerifyConfig;
use crate::VerifyError;
use crate::VerifyReport;
use crate::compare::CompareBuffer;
use crate::compare::streams_equal;
use crate::sources::EntrySource;

/// Verifies a source against a reference directory root.
///
/// Classifications are delivered through `sink` in emission order; the
/// returned report carries the totals and discrepancy lists.
///
/// Under the default fail-fast configuration the run stops at the first
/// differing entry (`report.completed` stays `false`). With
/// [`VerifyConfig::keep_going`] every mismatch is collected and the post-walk
/// still runs.
///
/// # Arguments
///
/// * `source` - Entry source to drive (zip, tar, or directory tree)
/// * `reference_root` - Directory the source is verified against
/// * `config` - Run configuration
/// * `sink` - Receives one [`Event`] per classification
///
/// # Errors
///
/// Returns an error if:
/// - The source is malformed or unreadable
/// - An entry name escapes the reference root or is otherwise invalid
/// - A reference file named by the source cannot be opened
/// - Reading either side fails mid-comparison
///
/// A content mismatch is *not* an error; it is reported through the sink and
/// recorded in the report.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use verarch_core::NoopSink;
/// use verarch_core::VerifyConfig;
/// use verarch_core::sources::ZipSource;
/// use verarch_core::verify;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut source = ZipSource::open("release.zip")?;
/// let config = VerifyConfig::default();
/// let report = verify(&mut source, Path::new("staging"), &config, &mut NoopSink)?;
/// if !report.is_clean() {
///     eprintln!("{} discrepancies", report.discrepancies());
/// }
/// # Ok(())
/// # }
/// ```
pub fn verify(
    source: &mut dyn EntrySource,
    reference_root: &Path,
    config: &VerifyConfig,
    sink: &mut dyn EventSink,
) -> Result<VerifyReport> {
    let mut report = VerifyReport::new();
    let mut touched: HashSet<String> = HashSet::new();
    let mut buffer = CompareBuffer::new();

    // Drive phase: source order, one entry at a time. Both streams live only
    // within one iteration, so they are released on every exit path before
    // the next entry is requested.
    while let Some(mut entry) = source.next_entry()? {
        let path = RelPath::parse(entry.name(), config)?;
        touched.insert(path.as_str().to_string());

        let resolved = path.resolve_under(reference_root);
        let mut reference = match File::open(&resolved) {
            Ok(file) => file,
            Err(source) => {
                // Absence on the reference side is only ever detected by the
                // post-walk; failure to open a file the source names is fatal.
                return Err(VerifyError::ReferenceOpen {
                    path: path.into_string(),
                    source,
                });
            }
        };

        let outcome = streams_equal(entry.reader(), &mut reference, &mut buffer)?;
        report.entries_compared += 1;
        report.bytes_compared += outcome.bytes_compared;

        if outcome.equal {
            report.entries_matched += 1;
            sink.on_event(&Event::EntryMatched { path });
        } else {
            report.mismatched.push(path.as_str().to_string());
            sink.on_event(&Event::EntryDiffered { path });
            if config.fail_fast {
                return Ok(report);
            }
        }
    }

    // Post-walk phase: sweep the reference root for files the source never
    // produced. Reported, not fatal; the walk runs to completion.
    for walk_entry in WalkDir::new(reference_root).min_depth(1) {
        let walk_entry = walk_entry.map_err(walk_error)?;
        if !walk_entry.file_type().is_file() {
            continue;
        }

        let relative = walk_entry
            .path()
            .strip_prefix(reference_root)
            .unwrap_or_else(|_| walk_entry.path());
        let path = RelPath::new_unchecked(slash_join(relative));

        if touched.contains(path.as_str()) {
            sink.on_event(&Event::ReferenceMatched { path });
        } else {
            report.missing_from_source.push(path.as_str().to_string());
            sink.on_event(&Event::ReferenceMissing { path });
        }
    }

    report.completed = true;
    Ok(report)
}

/// Joins a filesystem-relative path into the slash-normalized key form.
fn slash_join(relative: &Path) -> String {
    let mut key = String::new();
    for component in relative.components() {
        if !key.is_empty() {
            key.push('/');
        }
        key.push_str(&component.as_os_str().to_string_lossy());
    }
    key
}

fn walk_error(err: walkdir::Error) -> VerifyError {
    let path = err
        .path()
        .map_or_else(std::path::PathBuf::new, Path::to_path_buf);
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
    VerifyError::ReferenceWalk { path, source }
}
