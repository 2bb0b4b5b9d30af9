//! The entry-source trait shared by all source variants.

use std::io::Read;

use crate::Result;

/// One unit yielded by a source: a raw name and its single-use byte stream.
///
/// The entry mutably borrows its source, so the borrow checker enforces the
/// sequencing contract every variant needs: the stream must be consumed (or
/// dropped) before the next entry can be requested. This matters most for tar
/// sources, which have exactly one underlying cursor.
pub struct SourceEntry<'a> {
    name: String,
    reader: Box<dyn Read + 'a>,
}

impl<'a> SourceEntry<'a> {
    /// Creates an entry from a raw name and its stream.
    #[must_use]
    pub fn new(name: String, reader: Box<dyn Read + 'a>) -> Self {
        Self { name, reader }
    }

    /// Returns the entry name exactly as the source produced it.
    ///
    /// May use either separator convention; normalize through
    /// [`crate::RelPath::parse`] before comparing or joining.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entry's byte stream.
    pub fn reader(&mut self) -> &mut (dyn Read + 'a) {
        &mut *self.reader
    }
}

impl std::fmt::Debug for SourceEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A lazy, finite, non-restartable sequence of entries.
///
/// Each call yields the next entry, signals exhaustion with `Ok(None)`, or
/// fails fatally (malformed archive, unreadable directory). Exhaustion is
/// final; implementations are not required to keep returning `Ok(None)`.
pub trait EntrySource {
    /// Produces the next entry, or `None` when the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or its structure
    /// is invalid.
    fn next_entry(&mut self) -> Result<Option<SourceEntry<'_>>>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Read;

    struct SliceSource {
        items: Vec<(String, Vec<u8>)>,
        index: usize,
    }

    impl EntrySource for SliceSource {
        fn next_entry(&mut self) -> Result<Option<SourceEntry<'_>>> {
            let Some((name, data)) = self.items.get(self.index) else {
                return Ok(None);
            };
            self.index += 1;
            Ok(Some(SourceEntry::new(
                name.clone(),
                Box::new(Cursor::new(data.clone())),
            )))
        }
    }

    #[test]
    fn test_source_entry_round() {
        let mut source = SliceSource {
            items: vec![("a.txt".to_string(), b"abc".to_vec())],
            index: 0,
        };

        let mut entry = source.next_entry().unwrap().unwrap();
        assert_eq!(entry.name(), "a.txt");

        let mut contents = Vec::new();
        entry.reader().read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"abc");
        drop(entry);

        assert!(source.next_entry().unwrap().is_none());
    }
}
