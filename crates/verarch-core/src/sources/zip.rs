//! Zip-backed entry source.

use std::fs::File;
use std::path::Path;

use crate::Result;
use crate::VerifyError;

use super::traits::EntrySource;
use super::traits::SourceEntry;

/// Entry source backed by a zip archive.
///
/// The central directory is read once at open time; members are yielded in
/// central-directory order with a per-member decompressing reader opened on
/// demand. Directory markers are skipped.
pub struct ZipSource {
    archive: zip::ZipArchive<File>,
    index: usize,
}

impl ZipSource {
    /// Opens a zip archive for enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Io`] if the file cannot be opened and
    /// [`VerifyError::InvalidArchive`] if the central directory is malformed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let archive = zip::ZipArchive::new(file).map_err(|e| {
            VerifyError::InvalidArchive(format!("failed to open ZIP archive: {e}"))
        })?;

        Ok(Self { archive, index: 0 })
    }

    /// Returns the number of member records, directory markers included.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.archive.len()
    }
}

impl EntrySource for ZipSource {
    fn next_entry(&mut self) -> Result<Option<SourceEntry<'_>>> {
        // Skip directory markers by name so the decompressing reader is only
        // opened once, for the member actually yielded.
        while self.index < self.archive.len() {
            let is_dir_marker = self
                .archive
                .name_for_index(self.index)
                .is_some_and(|name| name.ends_with('/') || name.ends_with('\\'));
            if !is_dir_marker {
                break;
            }
            self.index += 1;
        }

        if self.index >= self.archive.len() {
            return Ok(None);
        }

        let index = self.index;
        self.index += 1;

        let member = self.archive.by_index(index).map_err(|e| {
            VerifyError::InvalidArchive(format!("failed to read ZIP entry {index}: {e}"))
        })?;

        // The member name is archive-native and may use backslash separators;
        // normalization happens in RelPath.
        let name = member.name().to_string();
        Ok(Some(SourceEntry::new(name, Box::new(member))))
    }
}
