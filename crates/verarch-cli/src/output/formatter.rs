//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use verarch_core::EventSink;
use verarch_core::VerifyReport;

/// Common output formatter trait.
///
/// Per-path classifications arrive through the [`EventSink`] supertrait while
/// the run is in flight; `finish` renders the summary once the report is in.
pub trait OutputFormatter: EventSink {
    /// Render the final summary for a completed (or aborted) run
    fn finish(&mut self, report: &VerifyReport) -> Result<()>;
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[allow(dead_code)]
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
