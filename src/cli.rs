//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Deploymap - Map pull-request diffs to the cluster configs they cover
#[derive(Parser, Debug)]
#[command(name = "deploymap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve which clusters are covered by a set of changed files
    Cover(commands::cover::CoverArgs),

    /// Stamp the generated-file header onto YAML files under a directory
    Stamp(commands::stamp::StampArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level),
        )
        .init();

        match self.command {
            Commands::Cover(args) => commands::cover::execute(args),
            Commands::Stamp(args) => commands::stamp::execute(args),
        }
    }
}
