//! # Manifests Command Implementation
//!
//! This module implements the `manifests` subcommand, which lists every
//! `.build-test-rules.yml` manifest in the tree, skipping vendored
//! dependencies under `managed_components`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use ci_audit::defaults::{default_repo_root, REPO_ROOT_ENV};
use ci_audit::manifest;

/// List build/test manifest files in the tree
#[derive(Args, Debug)]
pub struct ManifestsArgs {
    /// Root directory to search.
    #[arg(long, value_name = "DIR", env = REPO_ROOT_ENV)]
    pub root: Option<PathBuf>,
}

/// Execute the `manifests` command.
pub fn execute(args: ManifestsArgs) -> Result<()> {
    let root = args.root.unwrap_or_else(default_repo_root);
    for path in manifest::find_manifest_files(&root) {
        println!("{}", path.display());
    }
    Ok(())
}
