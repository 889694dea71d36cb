//! Default locations for cluster credentials and the e2e binary

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// Environment variable holding the kubeconfig path
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// Get the kubeconfig in the user's home directory
///
/// - Linux/macOS: `~/.kube/config`
/// - Windows: `%USERPROFILE%\.kube\config`
pub fn home_kubeconfig() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".kube").join("config"))
}

/// Resolve the kubeconfig passed to the e2e binary
///
/// An explicit value (flag or `KUBECONFIG`) wins. Otherwise the home
/// kubeconfig is used if it exists, and an empty path is passed through
/// so the e2e binary applies its own defaults.
pub fn resolve_kubeconfig(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return path;
    }
    home_kubeconfig()
        .filter(|p| p.exists())
        .unwrap_or_default()
}

/// Resolve the e2e binary to an executable path
///
/// Paths with a directory component are used as given. A bare name is
/// looked up on `PATH`.
pub fn resolve_binary(binary: &Path) -> Result<PathBuf> {
    let has_dir = binary
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());

    if has_dir {
        if binary.exists() {
            Ok(binary.to_path_buf())
        } else {
            Err(Error::process_start(binary, "no such file"))
        }
    } else {
        which::which(binary).map_err(|e| Error::process_start(binary, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_kubeconfig_wins() {
        let path = resolve_kubeconfig(Some(PathBuf::from("/etc/kube/admin.conf")));
        assert_eq!(path, PathBuf::from("/etc/kube/admin.conf"));
    }

    #[test]
    fn test_empty_kubeconfig_falls_back() {
        let path = resolve_kubeconfig(Some(PathBuf::new()));
        if let Some(home) = home_kubeconfig().filter(|p| p.exists()) {
            assert_eq!(path, home);
        } else {
            assert!(path.as_os_str().is_empty());
        }
    }

    #[test]
    fn test_missing_relative_binary() {
        let err = resolve_binary(Path::new("./definitely-not-here/e2e.test")).unwrap_err();
        assert!(matches!(err, Error::ProcessStart { .. }));
    }

    #[test]
    fn test_missing_bare_binary() {
        let err = resolve_binary(Path::new("op-readiness-no-such-binary")).unwrap_err();
        assert!(matches!(err, Error::ProcessStart { .. }));
    }
}
