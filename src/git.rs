//! Git accessors for CI audits.
//!
//! All lookups here are advisory: the public functions never fail. A git
//! command that cannot be spawned, exits non-zero, or a `.gitmodules` file
//! that cannot be parsed all degrade to an empty result with a warning,
//! since an empty answer is a safe default for the calling CI logic.
//!
//! This uses the system git command, which automatically handles whatever
//! repository layout and configuration the checkout uses.

use std::path::{Path, PathBuf};
use std::process::Command;

use ini::Ini;
use log::warn;

use crate::defaults::GITMODULES_FILENAME;
use crate::error::{Error, Result};

/// List the paths of all files tracked by git under `root`, as git reports
/// them (relative to `root`).
///
/// Worktree checkouts export a `GIT_DIR` pointing at
/// `<origin>/.git/worktrees/<name>`, which would redirect `git ls-files`
/// away from `root`; the variable is removed so resolution starts from the
/// working directory. On any failure this warns and returns an empty list.
pub fn list_tracked_files(root: &Path) -> Vec<String> {
    match run_ls_files(root) {
        Ok(files) => files,
        Err(e) => {
            warn!("{}", e);
            Vec::new()
        }
    }
}

/// Like [`list_tracked_files`], but each path joined with `root`.
pub fn list_tracked_files_full(root: &Path) -> Vec<PathBuf> {
    list_tracked_files(root)
        .into_iter()
        .map(|f| root.join(f))
        .collect()
}

fn run_ls_files(root: &Path) -> Result<Vec<String>> {
    let output = Command::new("git")
        .arg("ls-files")
        .current_dir(root)
        .env_remove("GIT_DIR")
        .output()
        .map_err(|e| Error::GitCommand {
            command: "git ls-files".to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: "git ls-files".to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// List the submodule paths declared in `<root>/.gitmodules`, in file order.
///
/// With `full_path` each entry is joined with `root`; otherwise paths are
/// returned as declared. A missing or unparseable `.gitmodules`, or one
/// declaring no `path` entries, warns and returns an empty list.
pub fn list_submodule_paths(root: &Path, full_path: bool) -> Vec<PathBuf> {
    let gitmodules = root.join(GITMODULES_FILENAME);
    let ini = match Ini::load_from_file(&gitmodules) {
        Ok(ini) => ini,
        Err(e) => {
            warn!("cannot read {}: {}", gitmodules.display(), e);
            return Vec::new();
        }
    };

    let mut dirs = Vec::new();
    for (_, properties) in ini.iter() {
        if let Some(path) = properties.get("path") {
            if full_path {
                dirs.push(root.join(path));
            } else {
                dirs.push(PathBuf::from(path));
            }
        }
    }

    if dirs.is_empty() {
        warn!("no submodule paths declared in {}", gitmodules.display());
    }
    dirs
}

/// Whether the file at `path` is marked executable.
///
/// On Unix this inspects the permission mode bits directly. Elsewhere the
/// native check is unreliable (Windows reports every file as executable),
/// so the git-recorded file mode is used instead.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Whether the file at `path` is marked executable.
///
/// On Unix this inspects the permission mode bits directly. Elsewhere the
/// native check is unreliable (Windows reports every file as executable),
/// so the git-recorded file mode is used instead.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    git_filemode_executable(path)
}

/// Whether git records an executable file mode for `path`.
///
/// Parses the mode column of `git ls-files --stage` (e.g. `100755`): the
/// file is executable when any of the three low-order octal digits has its
/// execute bit set. An untracked file (empty stage listing) is not
/// executable; a failed git invocation assumes executable so the file is
/// not flagged on an unreliable lookup.
pub fn git_filemode_executable(path: &Path) -> bool {
    let output = match Command::new("git")
        .args(["ls-files", "--stage"])
        .arg(path)
        .output()
    {
        Ok(output) if output.status.success() => output,
        _ => return true,
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Stage format: "<mode> <object> <stage>\t<file>", mode like 100755.
    let Some(mode) = stdout.split_whitespace().next() else {
        return false;
    };
    mode.chars()
        .rev()
        .take(3)
        .any(|c| c.to_digit(8).is_some_and(|d| d & 1 != 0))
}
