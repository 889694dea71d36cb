//! Test case configuration types
//!
//! Defines the data structures for deserializing the YAML test file.

use serde::Deserialize;
use std::path::Path;

use crate::common::{Error, Result};

/// The complete set of test cases loaded from a YAML file
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct TestSuite {
    /// Test cases in file order
    #[serde(rename = "testCases", default)]
    pub test_cases: Vec<TestCaseDescriptor>,
}

/// A single operational readiness test case
///
/// Every field is optional in YAML and defaults to empty.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TestCaseDescriptor {
    /// Coarse grouping label used by `--category`
    pub category: String,
    /// Ginkgo focus regex fragments, alternated with `|`
    pub focus: Vec<String>,
    /// Ginkgo skip regex fragments, alternated with `|`
    pub skip: Vec<String>,
    /// Kubernetes versions the case applies to (informational)
    #[serde(rename = "kubernetesVersions")]
    pub kubernetes_versions: Vec<String>,
    /// Windows pod image (informational)
    pub windows_image: String,
    /// Linux pod image (informational)
    pub linux_image: String,
    /// Human-readable description used in log lines
    pub description: String,
}

impl TestSuite {
    /// Load the test suite from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a test suite from YAML text
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }
}
