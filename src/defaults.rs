//! Default values and well-known filenames for ci-audit.
//!
//! This module provides centralized constants used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Filename of the root CI configuration document.
pub const DEFAULT_CONFIG_FILENAME: &str = ".gitlab-ci.yml";

/// Filename of per-directory build/test manifest files.
pub const MANIFEST_FILENAME: &str = ".build-test-rules.yml";

/// Directory name holding vendored dependencies; manifests under it are
/// not ours to audit.
pub const VENDORED_COMPONENTS_DIR: &str = "managed_components";

/// Filename of the submodule declaration file at the repository root.
pub const GITMODULES_FILENAME: &str = ".gitmodules";

/// Environment variable selecting the repository root.
pub const REPO_ROOT_ENV: &str = "CI_AUDIT_ROOT";

/// Returns the default repository root.
///
/// Reads the `CI_AUDIT_ROOT` environment variable, falling back to the
/// current working directory. This is resolved once at process start and
/// passed explicitly into the components that need it; nothing in the
/// library reads the environment after that.
pub fn default_repo_root() -> PathBuf {
    std::env::var_os(REPO_ROOT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
