//! # Cluster Configuration Schema and Loading
//!
//! This module defines the data structure that represents a cluster
//! configuration file, as well as the logic for loading it. A cluster config
//! is a small YAML document declaring one deployable unit:
//!
//! ```yaml
//! cluster: east-1
//! env: production
//! ignore: false
//! expanded: expanded
//! ```
//!
//! ## Key Components
//!
//! - **`ClusterConfig`**: The parsed config plus two derived paths: the
//!   absolute root of the cluster's expanded-output tree and the config's own
//!   declaration path relative to the repository root.
//!
//! Configs are immutable value records once loaded. The resolver never sets
//! the subpath on a discovered config in place; it calls `with_subpath` to
//! produce a new record, so a config can be safely reused across calls.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::rel_string;

fn default_expanded() -> String {
    "expanded".to_string()
}

/// One deployable cluster as declared by its configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Cluster name (e.g., "east-1")
    pub cluster: String,
    /// Environment tag (e.g., "production", "staging")
    pub env: String,
    /// If set, the cluster is never considered for diff coverage.
    #[serde(default)]
    pub ignore: bool,
    /// Directory holding the cluster's expanded output, relative to the
    /// config file's own directory.
    #[serde(default = "default_expanded")]
    pub expanded: String,

    /// Absolute path of the expanded-output tree, derived at load time.
    #[serde(skip)]
    pub expanded_path: PathBuf,
    /// Declaration path relative to the repository root, derived at load time.
    #[serde(skip)]
    rel_path: String,
    /// The subdirectory of the expanded tree that should be applied.
    #[serde(skip)]
    pub subpath: String,
}

impl ClusterConfig {
    /// Parse a cluster config from YAML contents.
    ///
    /// `path` is the location of the config file and `repo_root` the
    /// repository it was found in; both are needed to derive the expanded
    /// output path and the declaration-relative path.
    pub fn parse(contents: &str, path: &Path, repo_root: &Path) -> Result<Self> {
        let mut config: ClusterConfig = serde_yaml::from_str(contents)?;

        if config.cluster.is_empty() {
            return Err(Error::ConfigParse {
                message: format!("empty cluster name in {}", path.display()),
                hint: Some("set 'cluster:' to a non-empty name".to_string()),
            });
        }

        let config_dir = path.parent().unwrap_or_else(|| Path::new("."));
        config.expanded_path = config_dir.join(&config.expanded);
        config.rel_path = rel_string(repo_root, path)?;
        config.subpath = ".".to_string();

        Ok(config)
    }

    /// Load a cluster config from a file on disk.
    pub fn from_file(path: &Path, repo_root: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::parse(&contents, path, repo_root)
    }

    /// Descriptive identity used for selection overrides and logging.
    pub fn descriptive_name(&self) -> String {
        format!("{}-{}", self.env, self.cluster)
    }

    /// The config file's own path relative to the repository root.
    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    /// Produce a copy of this config with the subpath set.
    pub fn with_subpath(&self, subpath: impl Into<String>) -> Self {
        let mut config = self.clone();
        config.subpath = subpath.into();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FULL_CONFIG: &str = r#"
cluster: east-1
env: production
ignore: true
expanded: out
"#;

    #[test]
    fn test_parse_full_config() {
        let config = ClusterConfig::parse(
            FULL_CONFIG,
            Path::new("repo/clusters/east/cluster.yaml"),
            Path::new("repo"),
        )
        .unwrap();

        assert_eq!(config.cluster, "east-1");
        assert_eq!(config.env, "production");
        assert!(config.ignore);
        assert_eq!(config.expanded, "out");
        assert_eq!(
            config.expanded_path,
            PathBuf::from("repo/clusters/east/out")
        );
        assert_eq!(config.rel_path(), "clusters/east/cluster.yaml");
        assert_eq!(config.subpath, ".");
    }

    #[test]
    fn test_parse_defaults() {
        let yaml = "cluster: west-2\nenv: staging\n";
        let config = ClusterConfig::parse(
            yaml,
            Path::new("repo/clusters/west/cluster.yaml"),
            Path::new("repo"),
        )
        .unwrap();

        assert!(!config.ignore);
        assert_eq!(config.expanded, "expanded");
        assert_eq!(
            config.expanded_path,
            PathBuf::from("repo/clusters/west/expanded")
        );
    }

    #[test]
    fn test_parse_missing_required_field() {
        let yaml = "cluster: east-1\n";
        let result = ClusterConfig::parse(
            yaml,
            Path::new("repo/cluster.yaml"),
            Path::new("repo"),
        );
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_parse_empty_cluster_name() {
        let yaml = "cluster: \"\"\nenv: staging\n";
        let result = ClusterConfig::parse(
            yaml,
            Path::new("repo/cluster.yaml"),
            Path::new("repo"),
        );
        match result {
            Err(Error::ConfigParse { message, hint }) => {
                assert!(message.contains("empty cluster name"));
                assert!(hint.is_some());
            }
            other => panic!("Expected ConfigParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_descriptive_name() {
        let yaml = "cluster: east-1\nenv: production\n";
        let config = ClusterConfig::parse(
            yaml,
            Path::new("repo/cluster.yaml"),
            Path::new("repo"),
        )
        .unwrap();
        assert_eq!(config.descriptive_name(), "production-east-1");
    }

    #[test]
    fn test_with_subpath_leaves_original_untouched() {
        let yaml = "cluster: east-1\nenv: production\n";
        let config = ClusterConfig::parse(
            yaml,
            Path::new("repo/cluster.yaml"),
            Path::new("repo"),
        )
        .unwrap();

        let updated = config.with_subpath("x/y");
        assert_eq!(updated.subpath, "x/y");
        assert_eq!(config.subpath, ".");
        assert_eq!(updated.rel_path(), config.rel_path());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo_root = temp_dir.path();
        let config_path = repo_root.join("cluster.yaml");
        fs::write(&config_path, "cluster: east-1\nenv: production\n").unwrap();

        let config = ClusterConfig::from_file(&config_path, repo_root).unwrap();
        assert_eq!(config.cluster, "east-1");
        assert_eq!(config.rel_path(), "cluster.yaml");
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = ClusterConfig::from_file(
            &temp_dir.path().join("nope.yaml"),
            temp_dir.path(),
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
