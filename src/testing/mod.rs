//! Operational readiness test runner
//!
//! Loads test cases from a YAML file and runs each enabled case through
//! the external e2e binary, one at a time.

mod config;
mod context;
mod report;
mod runner;

pub use config::{TestCaseDescriptor, TestSuite};
pub use context::{build_e2e_args, RunContext, FLAKE_ATTEMPTS, NODE_OS_DISTRO, NON_BLOCKING_TAINTS};
pub use report::{CasePosition, ConsoleReporter, OutputStream, Reporter};
pub use runner::{CaseOutcome, CaseRecord, RunSummary, Runner};
