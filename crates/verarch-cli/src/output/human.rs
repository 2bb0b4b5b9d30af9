//! Human-readable line output with the fixed ARCHIVE:/FILESYS: prefixes.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use verarch_core::Event;
use verarch_core::EventSink;
use verarch_core::VerifyReport;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn write_line(&self, line: &str) {
        let _ = self.term.write_line(line);
    }
}

impl EventSink for HumanFormatter {
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::EntryMatched { path } => {
                if self.quiet {
                    return;
                }
                if self.use_colors {
                    self.write_line(&format!("ARCHIVE: {} {path}", style("[OK]").green()));
                } else {
                    self.write_line(&format!("ARCHIVE: [OK] {path}"));
                }
            }
            Event::EntryDiffered { path } => {
                // Findings always print, quiet or not
                if self.use_colors {
                    self.write_line(&format!(
                        "ARCHIVE: {} {path}",
                        style("[DIFFER]").red().bold()
                    ));
                } else {
                    self.write_line(&format!("ARCHIVE: [DIFFER] {path}"));
                }
            }
            Event::ReferenceMatched { path } => {
                if !self.verbose {
                    return;
                }
                if self.use_colors {
                    self.write_line(&format!("FILESYS: {} {path}", style("[OK]").green()));
                } else {
                    self.write_line(&format!("FILESYS: [OK] {path}"));
                }
            }
            Event::ReferenceMissing { path } => {
                if self.use_colors {
                    self.write_line(&format!(
                        "FILESYS: {} {path}",
                        style("[NOT FOUND]").yellow().bold()
                    ));
                } else {
                    self.write_line(&format!("FILESYS: [NOT FOUND] {path}"));
                }
            }
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn finish(&mut self, report: &VerifyReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if report.is_clean() {
            if self.use_colors {
                self.write_line(&format!(
                    "{} {} entries verified, reference tree fully covered",
                    style("✓").green().bold(),
                    report.entries_matched
                ));
            } else {
                self.write_line(&format!(
                    "{} entries verified, reference tree fully covered",
                    report.entries_matched
                ));
            }
            return Ok(());
        }

        self.write_line(&format!(
            "{} of {} entries matched, {} differed, {} missing from source",
            report.entries_matched,
            report.entries_compared,
            report.mismatched.len(),
            report.missing_from_source.len()
        ));
        if !report.completed {
            self.write_line("verification stopped at the first mismatch (use -k to see all)");
        }

        Ok(())
    }
}
