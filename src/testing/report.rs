//! Run progress reporting
//!
//! The runner never logs directly. It reports every transition to a
//! [`Reporter`] handed to it at construction, which lets tests capture
//! events instead of reading console output.

use std::ffi::OsString;

use colored::Colorize;

use crate::common::Error;

use super::config::TestCaseDescriptor;
use super::runner::{CaseOutcome, RunSummary};

/// Which pipe of the e2e binary a line came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

/// Position of a test case within the suite (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CasePosition {
    pub index: usize,
    pub total: usize,
}

/// Sink for runner events
pub trait Reporter {
    /// The case's category is not enabled
    fn case_skipped(&mut self, pos: CasePosition, case: &TestCaseDescriptor);

    /// The e2e binary is about to be started for the case
    fn case_started(&mut self, pos: CasePosition, case: &TestCaseDescriptor, args: &[OsString]);

    /// One line of output from the running e2e binary
    ///
    /// [`ConsoleReporter`] echoes stdout lines to stdout and stderr lines to
    /// stderr, so redirecting only stdout drops the e2e diagnostics.
    fn output_line(&mut self, stream: OutputStream, line: &str);

    fn case_passed(&mut self, pos: CasePosition, case: &TestCaseDescriptor);

    fn case_failed(&mut self, pos: CasePosition, case: &TestCaseDescriptor, error: &Error);

    /// All cases have been processed
    fn finished(&mut self, summary: &RunSummary);
}

/// Reports to the console: tracing events for progress, raw passthrough
/// for e2e output, and a colored summary at the end.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn case_skipped(&mut self, pos: CasePosition, case: &TestCaseDescriptor) {
        tracing::info!(
            "Skipping Operational Readiness Test {} / {} : {} is not in Category {}",
            pos.index,
            pos.total,
            case.description,
            case.category
        );
    }

    fn case_started(&mut self, pos: CasePosition, case: &TestCaseDescriptor, args: &[OsString]) {
        tracing::info!(
            "Running Operational Readiness Test {} / {} : {} on {}",
            pos.index,
            pos.total,
            case.description,
            case.category
        );
        tracing::debug!(args = ?args, "e2e arguments");
    }

    fn output_line(&mut self, stream: OutputStream, line: &str) {
        match stream {
            OutputStream::Stdout => println!("{line}"),
            OutputStream::Stderr => eprintln!("{line}"),
        }
    }

    fn case_passed(&mut self, pos: CasePosition, case: &TestCaseDescriptor) {
        tracing::info!(
            "Operational Readiness Test {} / {} passed : {}",
            pos.index,
            pos.total,
            case.description
        );
    }

    fn case_failed(&mut self, _pos: CasePosition, case: &TestCaseDescriptor, error: &Error) {
        tracing::error!(
            "Operational Readiness Test {} failed, error is {}",
            case.description,
            error
        );
    }

    fn finished(&mut self, summary: &RunSummary) {
        println!("\n{}", "Summary:".cyan().bold());
        println!(
            "  {} passed, {} failed, {} skipped",
            summary.passed().to_string().green(),
            summary.failed().to_string().red(),
            summary.skipped().to_string().dimmed()
        );

        for record in &summary.records {
            if let CaseOutcome::Failed(reason) = &record.outcome {
                println!(
                    "  {} {} [{}]: {}",
                    "✗".red(),
                    record.description,
                    record.category,
                    reason.dimmed()
                );
            }
        }

        if summary.has_failures() {
            println!("\n{}\n", "Operational readiness FAILED".red().bold());
        } else {
            println!("\n{}\n", "Operational readiness PASSED".green().bold());
        }
    }
}
