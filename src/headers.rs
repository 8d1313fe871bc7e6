//! Generated-file header stamping
//!
//! Expanded output is machine-generated; stamping a marker comment at the top
//! of every YAML file makes that obvious to anyone reading the tree and gives
//! review tooling something cheap to detect. Stamping is idempotent: files
//! that already start with the marker are left alone.

use std::fs;
use std::path::Path;

use crate::discovery::CONFIG_EXTENSION;
use crate::error::Result;

/// Comment prefixed to every generated YAML file
pub const GENERATED_HEADER: &str = "# Generated by \"deploymap expand\". DO NOT EDIT.\n";

/// Prefix every YAML file under `root` with the generated-file header,
/// skipping files that already carry it.
pub fn add_headers(root: &Path) -> Result<()> {
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(CONFIG_EXTENSION) {
            continue;
        }

        let contents = fs::read(path)?;
        if contents.starts_with(GENERATED_HEADER.as_bytes()) {
            continue;
        }

        let mut stamped = Vec::with_capacity(GENERATED_HEADER.len() + contents.len());
        stamped.extend_from_slice(GENERATED_HEADER.as_bytes());
        stamped.extend_from_slice(&contents);
        fs::write(path, stamped)?;
    }

    Ok(())
}
