//! CLI command handling
//!
//! Loads the test file, runs the suite and maps the outcome to an exit code.

use std::process::ExitCode;

use crate::commands::RunArgs;
use crate::common::Result;
use crate::testing::{ConsoleReporter, Runner, TestSuite};

/// Run the readiness suite described by `args`
///
/// Returns `Ok(true)` when every enabled test case passed. A test file
/// that cannot be loaded is an error and nothing is run.
pub async fn run(args: RunArgs) -> Result<bool> {
    let suite = TestSuite::load(&args.test_file)?;
    tracing::debug!(
        "Loaded {} test cases from {}",
        suite.len(),
        args.test_file.display()
    );

    let mut runner = Runner::new(args.into_context(), ConsoleReporter::new());
    let summary = runner.run(&suite).await;

    Ok(!summary.has_failures())
}

/// Map a run result to the process exit code
pub fn exit_code(result: &Result<bool>) -> ExitCode {
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) | Err(_) => ExitCode::FAILURE,
    }
}
