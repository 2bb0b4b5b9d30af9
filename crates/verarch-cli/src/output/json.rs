//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use verarch_core::Event;
use verarch_core::EventSink;
use verarch_core::VerifyReport;

/// Buffers per-path classifications and emits a single summary document.
pub struct JsonFormatter {
    matched: Vec<String>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            matched: Vec::new(),
        }
    }

    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl EventSink for JsonFormatter {
    fn on_event(&mut self, event: &Event) {
        // Mismatches and missing files are carried by the report itself
        if let Event::EntryMatched { path } = event {
            self.matched.push(path.as_str().to_string());
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn finish(&mut self, report: &VerifyReport) -> Result<()> {
        #[derive(Serialize)]
        struct VerifyOutput {
            clean: bool,
            completed: bool,
            entries_compared: usize,
            entries_matched: usize,
            bytes_compared: u64,
            matched: Vec<String>,
            differed: Vec<String>,
            missing_from_source: Vec<String>,
        }

        let data = VerifyOutput {
            clean: report.is_clean(),
            completed: report.completed,
            entries_compared: report.entries_compared,
            entries_matched: report.entries_matched,
            bytes_compared: report.bytes_compared,
            matched: std::mem::take(&mut self.matched),
            differed: report.mismatched.clone(),
            missing_from_source: report.missing_from_source.clone(),
        };

        let output = JsonOutput::success("verify", data);
        Self::output(&output)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_formatter_collects_matches() {
        let mut formatter = JsonFormatter::new();
        let config = verarch_core::VerifyConfig::default();
        let path = verarch_core::RelPath::parse("a.txt", &config).unwrap();

        formatter.on_event(&Event::EntryMatched { path: path.clone() });
        formatter.on_event(&Event::ReferenceMissing { path });

        assert_eq!(formatter.matched, vec!["a.txt"]);
    }

    #[test]
    fn test_json_envelope_shape() {
        #[derive(Serialize)]
        struct TestData {
            value: String,
        }

        let output = JsonOutput::success(
            "verify",
            TestData {
                value: "test".to_string(),
            },
        );
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"operation\":\"verify\""));
        assert!(json.contains("\"status\":\"success\""));
    }
}
