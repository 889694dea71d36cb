//! Error types for the readiness runner
//!
//! Only configuration errors abort a run. Process errors are scoped to a
//! single test case and recorded as that case's failure.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the readiness runner
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Failed to read test file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse test file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    // === Process Errors ===
    #[error("Failed to start e2e binary '{}': {reason}", .binary.display())]
    ProcessStart { binary: PathBuf, reason: String },

    #[error("{}", exit_message(.code))]
    ProcessExit { code: Option<i32> },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a process start error for the given binary
    pub fn process_start(binary: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ProcessStart {
            binary: binary.into(),
            reason: reason.to_string(),
        }
    }
}

fn exit_message(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("e2e binary exited with status {code}"),
        None => "e2e binary was terminated by a signal".to_string(),
    }
}
