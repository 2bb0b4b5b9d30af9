//! Tar-backed entry source.

use std::io::Read;

use crate::Result;
use crate::VerifyError;

use super::traits::EntrySource;
use super::traits::SourceEntry;

/// Entry source backed by a sequential tar stream.
///
/// Wraps the entry iterator of a [`tar::Archive`]; the archive itself stays
/// with the caller so the source works identically over a plain file, a gzip
/// decoder, or standard input. Tar has a single underlying cursor, so each
/// yielded stream must be consumed before the next header can be read; the
/// entry's borrow of the source enforces exactly that.
///
/// Directory entries (header type, or a name ending in the tar directory
/// convention `/`) are skipped.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
///
/// use verarch_core::sources::EntrySource;
/// use verarch_core::sources::TarSource;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("backup.tar")?;
/// let mut archive = tar::Archive::new(file);
/// let mut source = TarSource::new(archive.entries()?);
/// while let Some(entry) = source.next_entry()? {
///     println!("{}", entry.name());
/// }
/// # Ok(())
/// # }
/// ```
pub struct TarSource<'a, R: Read + 'a> {
    entries: tar::Entries<'a, R>,
}

impl<'a, R: Read> TarSource<'a, R> {
    /// Creates a source over a tar archive's entry iterator.
    #[must_use]
    pub fn new(entries: tar::Entries<'a, R>) -> Self {
        Self { entries }
    }
}

impl<R: Read> EntrySource for TarSource<'_, R> {
    fn next_entry(&mut self) -> Result<Option<SourceEntry<'_>>> {
        for entry_result in self.entries.by_ref() {
            let entry = entry_result.map_err(|e| {
                VerifyError::InvalidArchive(format!("failed to read TAR entry: {e}"))
            })?;

            if entry.header().entry_type().is_dir() {
                continue;
            }
            let name_bytes = entry.path_bytes();
            if name_bytes.is_empty() || name_bytes.ends_with(b"/") {
                continue;
            }

            let name = String::from_utf8_lossy(&name_bytes).into_owned();
            drop(name_bytes);
            return Ok(Some(SourceEntry::new(name, Box::new(entry))));
        }

        Ok(None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn build_tar(members: &[(&str, &[u8])]) -> Vec<u8> {
        let mut builder = tar::Builder::new(Vec::new());
        for (name, data) in members {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            if name.ends_with('/') {
                header.set_entry_type(tar::EntryType::Directory);
            }
            header.set_cksum();
            builder.append_data(&mut header, name, *data).unwrap();
        }
        builder.into_inner().unwrap()
    }

    #[test]
    fn test_entries_in_stream_order() {
        let data = build_tar(&[("z.txt", b"zee"), ("a.txt", b"ay")]);
        let mut archive = tar::Archive::new(Cursor::new(data));
        let mut source = TarSource::new(archive.entries().unwrap());

        let mut names = Vec::new();
        while let Some(entry) = source.next_entry().unwrap() {
            names.push(entry.name().to_string());
        }
        assert_eq!(names, vec!["z.txt", "a.txt"]);
    }

    #[test]
    fn test_directory_entries_skipped() {
        let data = build_tar(&[("dir/", b""), ("dir/file.txt", b"x")]);
        let mut archive = tar::Archive::new(Cursor::new(data));
        let mut source = TarSource::new(archive.entries().unwrap());

        let entry = source.next_entry().unwrap().unwrap();
        assert_eq!(entry.name(), "dir/file.txt");
        drop(entry);
        assert!(source.next_entry().unwrap().is_none());
    }

    #[test]
    fn test_entry_stream_contents() {
        let data = build_tar(&[("f.txt", b"payload")]);
        let mut archive = tar::Archive::new(Cursor::new(data));
        let mut source = TarSource::new(archive.entries().unwrap());

        let mut entry = source.next_entry().unwrap().unwrap();
        let mut contents = Vec::new();
        entry.reader().read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"payload");
    }

    #[test]
    fn test_empty_tar() {
        let data = build_tar(&[]);
        let mut archive = tar::Archive::new(Cursor::new(data));
        let mut source = TarSource::new(archive.entries().unwrap());
        assert!(source.next_entry().unwrap().is_none());
    }

    #[test]
    fn test_garbage_stream_is_invalid_archive() {
        let garbage = vec![0xFFu8; 1024];
        let mut archive = tar::Archive::new(Cursor::new(garbage));
        let mut source = TarSource::new(archive.entries().unwrap());

        let result = source.next_entry();
        assert!(matches!(result, Err(VerifyError::InvalidArchive(_))));
    }

    #[test]
    fn test_gzip_decoded_stream() {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write;

        let tar_data = build_tar(&[("g.txt", b"gzipped")]);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&tar_data).unwrap();
        let gz_data = encoder.finish().unwrap();

        let decoder = flate2::read::GzDecoder::new(Cursor::new(gz_data));
        let mut archive = tar::Archive::new(decoder);
        let mut source = TarSource::new(archive.entries().unwrap());

        let mut entry = source.next_entry().unwrap().unwrap();
        assert_eq!(entry.name(), "g.txt");
        let mut contents = Vec::new();
        entry.reader().read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"gzipped");
    }
}
