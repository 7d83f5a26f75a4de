//! # Ls-Files Command Implementation
//!
//! This module implements the `ls-files` subcommand, which lists all files
//! tracked by version control under the repository root.
//!
//! The listing is advisory: outside a repository, or when git is
//! unavailable, the command prints nothing and exits successfully (with a
//! warning on stderr at the default log level).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use ci_audit::defaults::{default_repo_root, REPO_ROOT_ENV};
use ci_audit::git;

/// List files tracked by version control
#[derive(Args, Debug)]
pub struct LsFilesArgs {
    /// Repository root to list files under.
    #[arg(long, value_name = "DIR", env = REPO_ROOT_ENV)]
    pub root: Option<PathBuf>,

    /// Print each path joined with the repository root.
    #[arg(long)]
    pub full_path: bool,
}

/// Execute the `ls-files` command.
pub fn execute(args: LsFilesArgs) -> Result<()> {
    let root = args.root.unwrap_or_else(default_repo_root);
    if args.full_path {
        for path in git::list_tracked_files_full(&root) {
            println!("{}", path.display());
        }
    } else {
        for file in git::list_tracked_files(&root) {
            println!("{}", file);
        }
    }
    Ok(())
}
