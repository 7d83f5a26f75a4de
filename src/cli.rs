//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// CI Audit - Inspect CI configuration and repository state
#[derive(Parser, Debug)]
#[command(name = "ci-audit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze rule fragments in the CI configuration
    Rules(commands::rules::RulesArgs),
    /// List declared submodule paths
    Submodules(commands::submodules::SubmodulesArgs),
    /// List build/test manifest files in the tree
    Manifests(commands::manifests::ManifestsArgs),
    /// List files tracked by version control
    LsFiles(commands::ls_files::LsFilesArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .filter_level(self.log_level)
            .init();

        match self.command {
            Commands::Rules(args) => commands::rules::execute(args),
            Commands::Submodules(args) => commands::submodules::execute(args),
            Commands::Manifests(args) => commands::manifests::execute(args),
            Commands::LsFiles(args) => commands::ls_files::execute(args),
        }
    }
}
