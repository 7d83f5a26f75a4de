//! # Submodules Command Implementation
//!
//! This module implements the `submodules` subcommand, which lists the
//! submodule paths declared in the repository's `.gitmodules` file.
//!
//! A repository without submodules (or without a readable `.gitmodules`)
//! prints nothing and exits successfully; the lookup is advisory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use ci_audit::defaults::{default_repo_root, REPO_ROOT_ENV};
use ci_audit::git;

/// List declared submodule paths
#[derive(Args, Debug)]
pub struct SubmodulesArgs {
    /// Repository root containing the .gitmodules file.
    #[arg(long, value_name = "DIR", env = REPO_ROOT_ENV)]
    pub root: Option<PathBuf>,

    /// Print each path joined with the repository root.
    #[arg(long)]
    pub full_path: bool,
}

/// Execute the `submodules` command.
pub fn execute(args: SubmodulesArgs) -> Result<()> {
    let root = args.root.unwrap_or_else(default_repo_root);
    for path in git::list_submodule_paths(&root, args.full_path) {
        println!("{}", path.display());
    }
    Ok(())
}
