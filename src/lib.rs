//! Windows Operational Readiness runner
//!
//! Drives a pre-built Kubernetes e2e test binary against a cluster, one
//! declarative test case at a time, and reports aggregate pass/fail.

pub mod cli;
pub mod commands;
pub mod common;
pub mod testing;
