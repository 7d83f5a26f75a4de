//! # Rules Command Implementation
//!
//! This module implements the `rules` subcommand, which loads the merged CI
//! configuration and reports on rule-fragment consistency.
//!
//! ## Functionality
//!
//! - **Summary**: by default, prints the declared and used rule sets along
//!   with the unused and orphaned differences.
//! - **CI gating**: with `--unused` or `--orphans`, prints only that set
//!   (one name per line) and exits non-zero when it is non-empty, so the
//!   command can act as a pipeline check.
//!
//! This command is a read-only operation; configuration load failures are
//! fatal by design.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use ci_audit::config::CiConfig;
use ci_audit::defaults::{default_repo_root, DEFAULT_CONFIG_FILENAME, REPO_ROOT_ENV};

/// Analyze rule fragments in the CI configuration
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Repository root used to resolve included documents.
    #[arg(long, value_name = "DIR", env = REPO_ROOT_ENV)]
    pub root: Option<PathBuf>,

    /// Path to the root CI configuration file, relative to the root.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Print only rules that are declared but never referenced
    /// via `extends`; exit non-zero when any exist.
    #[arg(long)]
    pub unused: bool,

    /// Print only rules referenced via `extends` but never declared;
    /// exit non-zero when any exist.
    #[arg(long)]
    pub orphans: bool,
}

/// Execute the `rules` command.
pub fn execute(args: RulesArgs) -> Result<()> {
    let root = args.root.unwrap_or_else(default_repo_root);
    let config_path = root.join(&args.config);

    let config = CiConfig::load(&root, &config_path)
        .with_context(|| format!("failed to load CI configuration from {}", config_path.display()))?;

    if args.unused {
        return gate("unused", &config.unused_rules());
    }
    if args.orphans {
        return gate("orphaned", &config.orphaned_rules());
    }

    print_section("Declared rules", config.declared_rules());
    print_section("Used rules", config.used_rules());
    print_section("Unused rules", &config.unused_rules());
    print_section("Orphaned rules", &config.orphaned_rules());
    Ok(())
}

fn gate(kind: &str, rules: &BTreeSet<String>) -> Result<()> {
    for rule in rules {
        println!("{}", rule);
    }
    if !rules.is_empty() {
        bail!("{} {} rule(s) found", rules.len(), kind);
    }
    Ok(())
}

fn print_section(title: &str, rules: &BTreeSet<String>) {
    println!("{} ({}):", title, rules.len());
    for rule in rules {
        println!("  {}", rule);
    }
}
