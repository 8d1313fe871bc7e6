//! Cover command implementation
//!
//! Runs the diff-to-cluster resolver over a repository and prints one line
//! per covered cluster: declaration path, descriptive name, and subpath,
//! tab-separated. Changed files come from trailing arguments and/or a
//! one-path-per-line file supplied with `--diffs`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use deploymap::resolve::{covered_clusters, ChangedFile};

/// Arguments for the cover command
#[derive(Args, Debug)]
pub struct CoverArgs {
    /// Repository root to resolve against
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Changed files, relative to the repository root
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Read additional changed files from a file, one path per line
    #[arg(long, value_name = "PATH")]
    pub diffs: Option<PathBuf>,

    /// Only consider clusters with this environment tag
    #[arg(short, long, value_name = "ENV", env = "DEPLOYMAP_ENV")]
    pub env: Option<String>,

    /// Force the named cluster into the result even without matching diffs
    /// (repeatable)
    #[arg(short = 'c', long = "cluster", value_name = "ID")]
    pub clusters: Vec<String>,

    /// Use this subpath for every covered cluster instead of computing one
    #[arg(long, value_name = "PATH")]
    pub subpath: Option<String>,
}

/// Execute the cover command
pub fn execute(args: CoverArgs) -> Result<()> {
    if !args.root.exists() {
        anyhow::bail!("Repository root not found: {}", args.root.display());
    }

    let mut changed: Vec<ChangedFile> = args
        .files
        .iter()
        .map(|file| ChangedFile::new(file.as_str()))
        .collect();

    if let Some(diffs_path) = &args.diffs {
        let contents = std::fs::read_to_string(diffs_path)?;
        changed.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ChangedFile::new),
        );
    }

    let covered = covered_clusters(
        &args.root,
        &changed,
        args.env.as_deref(),
        &args.clusters,
        args.subpath.as_deref(),
    )?;

    for config in &covered {
        println!(
            "{}\t{}\t{}",
            config.rel_path(),
            config.descriptive_name(),
            config.subpath
        );
    }

    Ok(())
}
