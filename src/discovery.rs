//! Cluster discovery
//!
//! Walks a repository tree looking for cluster configuration files. Candidate
//! files are `*.yaml` files containing the `cluster:` marker substring; the
//! marker check is a cheap textual pre-filter so the walk does not pay full
//! YAML parse cost on every unrelated manifest in the repository.
//!
//! A candidate that matches the marker but fails parsing is treated as "not a
//! cluster config": discovery logs it at debug level and keeps walking. Real
//! failures (I/O, walk, relative-path errors) abort discovery.
//!
//! Surviving configs pass three independent filters, applied in order:
//!
//! 1. a non-empty selection set that does not contain the config's
//!    descriptive name
//! 2. the config's ignore flag
//! 3. a non-empty environment filter differing from the config's environment
//!
//! Each filter short-circuits on its own with its own log line, so a skipped
//! cluster's log shows exactly which rule dropped it.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};

use crate::config::ClusterConfig;
use crate::error::{Error, Result};

/// File extension of cluster configuration candidates
pub const CONFIG_EXTENSION: &str = "yaml";

/// Marker substring that a candidate must contain before a full parse is attempted
pub const CLUSTER_MARKER: &str = "cluster:";

/// Walk `repo_root` and return every surviving cluster config, keyed by its
/// declaration path relative to `repo_root`.
pub fn discover(
    repo_root: &Path,
    env_filter: Option<&str>,
    selected_ids: &[String],
) -> Result<BTreeMap<String, ClusterConfig>> {
    let mut configs = BTreeMap::new();

    for entry in walkdir::WalkDir::new(repo_root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(CONFIG_EXTENSION) {
            continue;
        }

        let bytes = std::fs::read(path).map_err(Error::Io)?;
        let contents = String::from_utf8_lossy(&bytes);
        if !contents.contains(CLUSTER_MARKER) {
            continue;
        }

        let config = match ClusterConfig::parse(&contents, path, repo_root) {
            Ok(config) => config,
            Err(err @ (Error::Yaml(_) | Error::ConfigParse { .. })) => {
                // Probably not a cluster config, skip over it
                debug!(
                    "Error evaluating whether {} is a cluster config: {}",
                    path.display(),
                    err
                );
                continue;
            }
            Err(err) => return Err(err),
        };

        info!("Found cluster config: {}", path.display());
        let name = config.descriptive_name();

        if !selected_ids.is_empty() && !selected_ids.iter().any(|id| id == &name) {
            info!(
                "Ignoring cluster {} because a selection set is active and cluster is not in it",
                name
            );
            continue;
        }

        if config.ignore {
            info!("Ignoring cluster {} because ignore is set", name);
            continue;
        }

        if let Some(env) = env_filter {
            if config.env != env {
                info!("Ignoring cluster {} because env is not {}", name, env);
                continue;
            }
        }

        configs.insert(config.rel_path().to_string(), config);
    }

    Ok(configs)
}
