//! Common utilities shared by the CLI and the test runner

pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
