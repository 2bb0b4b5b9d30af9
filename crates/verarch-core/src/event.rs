//! Classification events emitted during a verification run.

use crate::RelPath;

/// One classification produced by the reconciliation of a source entry or a
/// reference file.
///
/// Drive-phase events ([`Event::EntryMatched`], [`Event::EntryDiffered`]) are
/// emitted in source order as entries stream in. Post-walk events
/// ([`Event::ReferenceMatched`], [`Event::ReferenceMissing`]) follow once the
/// source is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Source entry is byte-identical to its reference file.
    EntryMatched {
        /// Normalized relative path of the entry.
        path: RelPath,
    },
    /// Source entry differs from its reference file in content or length.
    EntryDiffered {
        /// Normalized relative path of the entry.
        path: RelPath,
    },
    /// Reference file was produced by the source and already verified.
    ReferenceMatched {
        /// Reference-root-relative path of the file.
        path: RelPath,
    },
    /// Reference file was never produced by the source.
    ReferenceMissing {
        /// Reference-root-relative path of the file.
        path: RelPath,
    },
}

impl Event {
    /// Returns the relative path this event classifies.
    #[must_use]
    pub const fn path(&self) -> &RelPath {
        match self {
            Self::EntryMatched { path }
            | Self::EntryDiffered { path }
            | Self::ReferenceMatched { path }
            | Self::ReferenceMissing { path } => path,
        }
    }

    /// Returns `true` if this event reports a discrepancy between the source
    /// and the reference root.
    #[must_use]
    pub const fn is_discrepancy(&self) -> bool {
        matches!(
            self,
            Self::EntryDiffered { .. } | Self::ReferenceMissing { .. }
        )
    }
}

/// Consumer of classification events.
///
/// The engine never prints; every classification flows through the sink so
/// callers decide how (and whether) to render it.
///
/// # Examples
///
/// ```
/// use verarch_core::Event;
/// use verarch_core::EventSink;
///
/// struct LineSink;
///
/// impl EventSink for LineSink {
///     fn on_event(&mut self, event: &Event) {
///         println!("{event:?}");
///     }
/// }
/// ```
pub trait EventSink {
    /// Called once per classification, in emission order.
    fn on_event(&mut self, event: &Event);
}

/// No-op implementation of [`EventSink`] that discards every event.
///
/// Use this when only the final [`crate::VerifyReport`] matters.
#[derive(Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn on_event(&mut self, _event: &Event) {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::VerifyConfig;

    fn rel(s: &str) -> RelPath {
        RelPath::parse(s, &VerifyConfig::default()).unwrap()
    }

    #[test]
    fn test_event_path_accessor() {
        let event = Event::EntryMatched { path: rel("a.txt") };
        assert_eq!(event.path().as_str(), "a.txt");
    }

    #[test]
    fn test_discrepancy_classification() {
        assert!(!Event::EntryMatched { path: rel("a") }.is_discrepancy());
        assert!(Event::EntryDiffered { path: rel("a") }.is_discrepancy());
        assert!(!Event::ReferenceMatched { path: rel("a") }.is_discrepancy());
        assert!(Event::ReferenceMissing { path: rel("a") }.is_discrepancy());
    }

    #[test]
    fn test_noop_sink_accepts_events() {
        let mut sink = NoopSink;
        sink.on_event(&Event::ReferenceMissing { path: rel("x") });
    }
}
