//! Terminal output for a synchronisation run.

use std::io::{self, Stdout, Write};

use colored::Colorize;
use make_labels_core::{Error, LabelOperation, LabelOutcome, ProgressReporter, SyncReport};
use tracing::warn;

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;

/// Prints one line per label as it is processed, followed by a summary.
pub struct TerminalReporter<W: Write> {
    out: W,
}

impl TerminalReporter<Stdout> {
    /// Creates a reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Reports that the label file could not be used.
    pub fn label_file_failed(&mut self, error: &Error) {
        self.emit(&format!("{} {}", "error:".red().bold(), error));
    }

    /// Prints the created/updated/failed counts.
    pub fn summary(&mut self, report: &SyncReport) {
        self.emit(&format_summary(report));
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!(error = %e, "Failed to write progress output");
        }
    }
}

impl<W: Write> ProgressReporter for TerminalReporter<W> {
    fn label_started(&mut self, operation: LabelOperation, name: &str) {
        self.emit(&format!("{} `{}`...", operation.progress_verb(), name));
    }

    fn label_finished(&mut self, outcome: &LabelOutcome) {
        if let LabelOutcome::Failed { reason, .. } = outcome {
            self.emit(&format!("  {} {}", "error:".red().bold(), reason));
        }
    }

    fn listing_failed(&mut self, error: &Error) {
        self.emit(&format!(
            "{} could not list existing labels: {}",
            "warning:".yellow().bold(),
            error
        ));
    }
}

/// One-line summary such as `2 created, 1 updated, 0 failed`.
pub fn format_summary(report: &SyncReport) -> String {
    let created = format!("{} created", report.created());
    let updated = format!("{} updated", report.updated());
    let failed = format!("{} failed", report.failed());

    let failed = if report.failed() > 0 {
        failed.red().bold().to_string()
    } else {
        failed
    };

    format!("{}, {}, {}", created.green(), updated.green(), failed)
}
