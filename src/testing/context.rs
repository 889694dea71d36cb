//! Runtime parameters shared by every test case

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::PathBuf;

use super::config::TestCaseDescriptor;

/// Node OS distro passed to the e2e binary
pub const NODE_OS_DISTRO: &str = "windows";
/// Taints that must not block pod scheduling
pub const NON_BLOCKING_TAINTS: &str = "os";
/// Ginkgo flake attempts per spec; retries are disabled
pub const FLAKE_ATTEMPTS: u32 = 1;

/// Resolved runtime parameters, immutable for the whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Path to the e2e test binary
    pub e2e_binary: PathBuf,
    /// Path to the kubeconfig handed to the e2e binary
    pub kubeconfig: PathBuf,
    /// Kubernetes provider name (local, gce, aks, ...)
    pub provider: String,
    /// Enabled categories; empty means every category runs
    pub categories: BTreeSet<String>,
}

impl RunContext {
    pub fn new(
        e2e_binary: impl Into<PathBuf>,
        kubeconfig: impl Into<PathBuf>,
        provider: impl Into<String>,
        categories: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            e2e_binary: e2e_binary.into(),
            kubeconfig: kubeconfig.into(),
            provider: provider.into(),
            categories: categories.into_iter().collect(),
        }
    }

    /// Whether test cases in `category` should run
    pub fn category_enabled(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.contains(category)
    }
}

/// Build the e2e binary arguments for a test case
///
/// Focus and skip fragments are alternated into a single regex each and
/// only passed when non-empty.
pub fn build_e2e_args(case: &TestCaseDescriptor, ctx: &RunContext) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--provider".into(),
        ctx.provider.as_str().into(),
        "--kubeconfig".into(),
        ctx.kubeconfig.clone().into_os_string(),
        "--node-os-distro".into(),
        NODE_OS_DISTRO.into(),
        "--non-blocking-taints".into(),
        NON_BLOCKING_TAINTS.into(),
        "--ginkgo.flakeAttempts".into(),
        FLAKE_ATTEMPTS.to_string().into(),
    ];

    if !case.focus.is_empty() {
        args.push("--ginkgo.focus".into());
        args.push(case.focus.join("|").into());
    }

    if !case.skip.is_empty() {
        args.push("--ginkgo.skip".into());
        args.push(case.skip.join("|").into());
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(categories: &[&str]) -> RunContext {
        RunContext::new(
            "./e2e.test",
            "/home/user/.kube/config",
            "local",
            categories.iter().map(|c| c.to_string()),
        )
    }

    fn case(category: &str, focus: &[&str], skip: &[&str]) -> TestCaseDescriptor {
        TestCaseDescriptor {
            category: category.to_string(),
            focus: focus.iter().map(|s| s.to_string()).collect(),
            skip: skip.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_categories_enable_everything() {
        let ctx = ctx(&[]);
        assert!(ctx.category_enabled("network"));
        assert!(ctx.category_enabled("storage"));
        assert!(ctx.category_enabled(""));
    }

    #[test]
    fn test_categories_are_membership_checked() {
        let ctx = ctx(&["network", "Core.Storage"]);
        assert!(ctx.category_enabled("network"));
        assert!(ctx.category_enabled("Core.Storage"));
        assert!(!ctx.category_enabled("storage"));
        assert!(!ctx.category_enabled("Network"));
        assert!(!ctx.category_enabled(""));
    }

    #[test]
    fn test_base_args() {
        let args = build_e2e_args(&case("network", &[], &[]), &ctx(&[]));
        assert_eq!(
            args,
            vec![
                "--provider",
                "local",
                "--kubeconfig",
                "/home/user/.kube/config",
                "--node-os-distro",
                "windows",
                "--non-blocking-taints",
                "os",
                "--ginkgo.flakeAttempts",
                "1",
            ]
        );
    }

    #[test]
    fn test_focus_is_pipe_joined() {
        let args = build_e2e_args(&case("network", &["A", "B"], &[]), &ctx(&[]));
        let pos = args.iter().position(|a| a == "--ginkgo.focus").unwrap();
        assert_eq!(args[pos + 1], "A|B");
        assert!(!args.iter().any(|a| a == "--ginkgo.skip"));
    }

    #[test]
    fn test_skip_follows_focus() {
        let args = build_e2e_args(
            &case("storage", &["Storage"], &[r"\[Slow\]", "LinuxOnly"]),
            &ctx(&[]),
        );
        let tail: Vec<&str> = args[10..].iter().filter_map(|a| a.to_str()).collect();
        assert_eq!(
            tail,
            vec![
                "--ginkgo.focus",
                "Storage",
                "--ginkgo.skip",
                r"\[Slow\]|LinuxOnly"
            ]
        );
    }

    #[test]
    fn test_single_fragment_is_unchanged() {
        let args = build_e2e_args(&case("", &[], &["Serial"]), &ctx(&[]));
        assert_eq!(args[args.len() - 2..], ["--ginkgo.skip", "Serial"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_kubeconfig_is_passed_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/tmp/kube-\xff/config");
        let mut ctx = ctx(&[]);
        ctx.kubeconfig = PathBuf::from(raw);

        let args = build_e2e_args(&case("network", &[], &[]), &ctx);
        assert_eq!(args[2], "--kubeconfig");
        assert_eq!(args[3].as_os_str(), raw);
    }
}
