//! Stamp command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use deploymap::headers::add_headers;

/// Arguments for the stamp command
#[derive(Args, Debug)]
pub struct StampArgs {
    /// Directory whose YAML files should carry the generated-file header
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,
}

/// Execute the stamp command
pub fn execute(args: StampArgs) -> Result<()> {
    if !args.root.exists() {
        anyhow::bail!("Directory not found: {}", args.root.display());
    }

    add_headers(&args.root)?;
    println!("Stamped headers under {}", args.root.display());

    Ok(())
}
