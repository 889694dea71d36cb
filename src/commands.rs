//! CLI flag definitions
//!
//! Defines the clap arguments for the readiness runner.

use clap::Args;
use std::path::PathBuf;

use crate::common::paths::{self, KUBECONFIG_ENV};
use crate::testing::RunContext;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to YAML file containing the tests
    #[arg(long, default_value = "tests.yaml")]
    pub test_file: PathBuf,

    /// The E2E Ginkgo binary used to run the tests
    #[arg(long, default_value = "./e2e.test")]
    pub e2e_binary: PathBuf,

    /// The name of the Kubernetes provider (gce, gke, local, skeleton, etc.)
    #[arg(long, default_value = "local")]
    pub provider: String,

    /// Path to kubeconfig containing embedded authinfo
    #[arg(long, env = KUBECONFIG_ENV)]
    pub kubeconfig: Option<PathBuf>,

    /// Category of tests to run; repeat to select several (default: all)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,
}

impl RunArgs {
    /// Resolve the flags into the context shared by every test case
    pub fn into_context(self) -> RunContext {
        RunContext::new(
            self.e2e_binary,
            paths::resolve_kubeconfig(self.kubeconfig),
            self.provider,
            self.categories,
        )
    }
}
