//! Discovery of per-directory build/test manifest files.

use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::defaults::{MANIFEST_FILENAME, VENDORED_COMPONENTS_DIR};

/// Recursively find every `.build-test-rules.yml` under `root`.
///
/// Subtrees under a `managed_components` directory hold vendored
/// dependencies and are pruned entirely. Unreadable entries are warned
/// about and skipped. No ordering is guaranteed beyond what the directory
/// traversal yields.
pub fn find_manifest_files(root: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != VENDORED_COMPONENTS_DIR);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILENAME {
            paths.push(entry.into_path());
        }
    }

    paths
}
