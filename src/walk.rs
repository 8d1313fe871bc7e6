//! Directory-tree enumeration
//!
//! Thin wrapper over `walkdir` that yields regular files relative to a
//! caller-supplied base. Walk errors are fatal: a partially enumerated tree
//! would make the resolver attribute diffs to an incomplete ownership set.

use std::path::Path;

use crate::error::Result;
use crate::path::rel_string;

/// Enumerate every regular file under `root`, expressed relative to `base`.
///
/// `base` is usually an ancestor of `root` (the repository root), so the
/// returned paths can be compared directly against repository-relative diff
/// filenames.
pub fn files_relative(root: &Path, base: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        files.push(rel_string(base, entry.path())?);
    }

    Ok(files)
}
