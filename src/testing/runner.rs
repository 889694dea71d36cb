//! Test runner implementation
//!
//! Runs each enabled test case by invoking the e2e binary once, strictly
//! one case at a time, and records a pass/fail outcome per case.

use std::ffi::OsString;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::sync::mpsc;

use crate::common::{paths, Error, Result};

use super::config::{TestCaseDescriptor, TestSuite};
use super::context::{build_e2e_args, RunContext};
use super::report::{CasePosition, OutputStream, Reporter};

/// Final state of a single test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Skipped,
    Passed,
    /// Failed with the error message
    Failed(String),
}

/// Outcome of one test case within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    /// 1-based position in the suite
    pub index: usize,
    pub description: String,
    pub category: String,
    pub outcome: CaseOutcome,
}

/// Result of a whole run, in suite order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: Vec<CaseRecord>,
}

impl RunSummary {
    fn count(&self, f: impl Fn(&CaseOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| f(&r.outcome)).count()
    }

    pub fn passed(&self) -> usize {
        self.count(|o| *o == CaseOutcome::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| *o == CaseOutcome::Skipped)
    }

    /// Whether any enabled test case failed
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Sequential runner over a test suite
pub struct Runner<R: Reporter> {
    ctx: RunContext,
    reporter: R,
}

impl<R: Reporter> Runner<R> {
    pub fn new(ctx: RunContext, reporter: R) -> Self {
        Self { ctx, reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Run every test case in file order
    ///
    /// Case failures never stop the loop; they are collected in the
    /// returned summary.
    pub async fn run(&mut self, suite: &TestSuite) -> RunSummary {
        let total = suite.len();
        let mut summary = RunSummary::default();

        for (i, case) in suite.test_cases.iter().enumerate() {
            let pos = CasePosition {
                index: i + 1,
                total,
            };

            let outcome = if !self.ctx.category_enabled(&case.category) {
                self.reporter.case_skipped(pos, case);
                CaseOutcome::Skipped
            } else {
                let args = build_e2e_args(case, &self.ctx);
                self.reporter.case_started(pos, case, &args);

                match self.run_case(&args).await {
                    Ok(()) => {
                        self.reporter.case_passed(pos, case);
                        CaseOutcome::Passed
                    }
                    Err(e) => {
                        self.reporter.case_failed(pos, case, &e);
                        CaseOutcome::Failed(e.to_string())
                    }
                }
            };

            summary.records.push(record(pos, case, outcome));
        }

        self.reporter.finished(&summary);
        summary
    }

    /// Invoke the e2e binary once and stream its output until it exits
    async fn run_case(&mut self, args: &[OsString]) -> Result<()> {
        let binary = paths::resolve_binary(&self.ctx.e2e_binary)?;

        let mut child = TokioCommand::new(&binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::process_start(&binary, e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::process_start(&binary, "stdout pipe unavailable"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::process_start(&binary, "stderr pipe unavailable"))?;

        // Drain both pipes at once; the channel serializes lines for the reporter.
        let (tx, mut rx) = mpsc::unbounded_channel();
        let stdout_task = tokio::spawn(forward_lines(stdout, OutputStream::Stdout, tx.clone()));
        let stderr_task = tokio::spawn(forward_lines(stderr, OutputStream::Stderr, tx));

        while let Some((stream, line)) = rx.recv().await {
            self.reporter.output_line(stream, &line);
        }

        for task in [stdout_task, stderr_task] {
            if let Err(e) = task.await {
                tracing::warn!("Output reader task failed: {}", e);
            }
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::ProcessExit {
                code: status.code(),
            })
        }
    }
}

fn record(pos: CasePosition, case: &TestCaseDescriptor, outcome: CaseOutcome) -> CaseRecord {
    CaseRecord {
        index: pos.index,
        description: case.description.clone(),
        category: case.category.clone(),
        outcome,
    }
}

/// Read `reader` line by line and forward each line tagged with `stream`
///
/// Invalid UTF-8 is replaced, not treated as an error.
async fn forward_lines<T>(
    reader: T,
    stream: OutputStream,
    tx: mpsc::UnboundedSender<(OutputStream, String)>,
) where
    T: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']).to_string();
                if tx.send((stream, line)).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::warn!(?stream, "Failed to read e2e output: {}", e);
                break;
            }
        }
    }
}
