//! Windows Operational Readiness - Kubernetes e2e test driver
//!
//! Runs the categories of an e2e test binary selected from a YAML test
//! file and exits non-zero if any of them fail.

use std::process::ExitCode;

use clap::Parser;
use op_readiness::{cli, commands::RunArgs, common::logging};

#[derive(Parser)]
#[command(
    name = "op-readiness",
    about = "The Windows Operational Readiness testing suite",
    long_about = "Run this software and make sure your Windows node is suitable for Kubernetes operations."
)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_cli();

    let cli = Cli::parse();
    let result = cli::run(cli.run).await;

    if let Err(e) = &result {
        tracing::error!("Create op-readiness context failed, error is {}", e);
    }

    cli::exit_code(&result)
}
