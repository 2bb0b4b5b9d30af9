//! Verification run reporting.

/// Summary of a verification run.
///
/// Accumulated by [`crate::verify`] as entries stream in; the per-path detail
/// is delivered through [`crate::EventSink`], this report carries the totals
/// and the discrepancy lists.
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    /// Number of source entries compared against the reference root.
    pub entries_compared: usize,

    /// Number of source entries that matched byte for byte.
    pub entries_matched: usize,

    /// Total bytes examined by the comparator.
    pub bytes_compared: u64,

    /// Normalized paths of entries that differed from the reference root.
    ///
    /// At most one element under the default fail-fast policy.
    pub mismatched: Vec<String>,

    /// Reference files never produced by the source.
    pub missing_from_source: Vec<String>,

    /// Whether the run reached the end of the post-walk.
    ///
    /// `false` when the drive phase aborted at the first mismatch.
    pub completed: bool,
}

impl VerifyReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the source and reference root reconciled exactly:
    /// no mismatch and no reference file missing from the source.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatched.is_empty() && self.missing_from_source.is_empty()
    }

    /// Returns the total number of discrepancies found.
    #[must_use]
    pub fn discrepancies(&self) -> usize {
        self.mismatched.len() + self.missing_from_source.len()
    }
}
