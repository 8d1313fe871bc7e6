//! Diff-to-cluster resolution
//!
//! This is the top-level orchestrator of the library. Given a repository root
//! and the changed-file list of a pull request, it determines which clusters
//! are "covered" by those changes and how narrowly each one can be re-applied.
//!
//! ## Process
//!
//! 1. Discover every cluster config in the repository that survives the
//!    environment and selection filters.
//! 2. Expand each config into the full set of files under its
//!    expanded-output tree.
//! 3. Invert that ownership into a file → cluster index. A file may be owned
//!    by more than one cluster; overlapping trees are legal.
//! 4. Intersect the changed-file list against the index, accumulating the
//!    changed files attributed to each cluster.
//! 5. For every cluster with attributed changes, set the subpath: the
//!    caller-supplied override verbatim, or the lowest common ancestor of the
//!    cluster's attributed files within its own expanded tree.
//! 6. Return the covered clusters ordered ascending by declaration path.
//!
//! Two overrides adjust this behavior:
//!
//! - `selected_ids`: clusters in this list are never dropped, even with zero
//!   attributed changes (they come back with subpath `"."`).
//! - `subpath_override`: used verbatim for every covered cluster instead of
//!   the per-cluster ancestor computation.
//!
//! All state is local to a single call. The index and accumulator are built
//! from scratch, used, and dropped; nothing is cached between invocations.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use log::info;

use crate::config::ClusterConfig;
use crate::discovery::discover;
use crate::error::Result;
use crate::path::{lowest_parent, rel_to};
use crate::walk::files_relative;

/// A single file reported as changed by the calling context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Path of the file, relative to the repository root
    pub filename: String,
}

impl ChangedFile {
    /// Create a changed-file record from a repository-relative path.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

impl From<&str> for ChangedFile {
    fn from(filename: &str) -> Self {
        Self::new(filename)
    }
}

impl From<String> for ChangedFile {
    fn from(filename: String) -> Self {
        Self::new(filename)
    }
}

/// Resolve the clusters covered by `diffs`, each with its subpath set.
///
/// `env` restricts resolution to clusters with a matching environment tag,
/// `selected_ids` forces the named clusters into the result regardless of
/// diff matches, and `subpath_override` replaces the per-cluster ancestor
/// computation. Empty diffs with no selection yield an empty result.
///
/// There is no partial-result mode: the first walk, path, or config-load
/// error aborts the whole call.
pub fn covered_clusters(
    repo_root: &Path,
    diffs: &[ChangedFile],
    env: Option<&str>,
    selected_ids: &[String],
    subpath_override: Option<&str>,
) -> Result<Vec<ClusterConfig>> {
    let configs = discover(repo_root, env, selected_ids)?;

    // Expand each surviving cluster into the files it owns
    let mut config_files: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (rel_path, config) in &configs {
        let files = files_relative(&config.expanded_path, repo_root)?;
        config_files.insert(rel_path.clone(), files);
    }

    // Invert ownership: each file maps to the declaration paths of the
    // clusters whose expanded tree contains it
    let mut configs_per_file: HashMap<String, Vec<String>> = HashMap::new();
    for (rel_path, files) in &config_files {
        for file in files {
            configs_per_file
                .entry(file.clone())
                .or_default()
                .push(rel_path.clone());
        }
    }

    // Selected clusters are forced into scope even with zero matching diffs
    let mut changed: BTreeMap<String, Vec<String>> = BTreeMap::new();
    if !selected_ids.is_empty() {
        for rel_path in configs.keys() {
            changed.insert(rel_path.clone(), Vec::new());
        }
    }

    for diff in diffs {
        if let Some(owners) = configs_per_file.get(&diff.filename) {
            for owner in owners {
                changed
                    .entry(owner.clone())
                    .or_default()
                    .push(diff.filename.clone());
            }
        }
    }

    info!("Changed cluster paths: {:?}", changed);

    // Iterating configs in BTreeMap key order yields the result already
    // sorted ascending by declaration path
    let mut covered = Vec::with_capacity(changed.len());
    for (rel_path, config) in &configs {
        let Some(changed_files) = changed.get(rel_path) else {
            continue;
        };

        let subpath = match subpath_override {
            Some(subpath) => subpath.to_string(),
            None => {
                let rel_expanded = rel_to(repo_root, &config.expanded_path)?;
                lowest_parent(&rel_expanded, changed_files)?
            }
        };

        info!("Setting subpath for cluster {} to {}", rel_path, subpath);
        covered.push(config.with_subpath(subpath));
    }

    Ok(covered)
}
