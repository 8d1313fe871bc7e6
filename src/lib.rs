//! # Deploymap Library
//!
//! This library provides the core functionality for mapping a pull request's
//! changed-file list onto the cluster deployment units declared in a GitOps
//! repository. It is designed to be used by the `deploymap` command-line tool
//! but can also be integrated into other tooling that needs to decide which
//! clusters to re-apply after a change.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::Path;
//! use deploymap::path::lowest_parent;
//!
//! // Two changed files under a cluster's expanded tree share the `x`
//! // directory, so only `x` needs to be re-applied.
//! let files = ["expanded/x/y.yaml", "expanded/x/z.yaml"];
//! let parent = lowest_parent(Path::new("expanded"), &files).unwrap();
//! assert_eq!(parent, "x");
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Cluster Configuration (`config`)**: A small YAML document declaring one
//!   deployable cluster: its name, environment, ignore flag, and the root of
//!   its expanded-output tree.
//! - **Discovery (`discovery`)**: Walks a repository tree, identifies cluster
//!   config candidates via a cheap marker pre-check, parses them, and applies
//!   the selection, ignore, and environment filters.
//! - **Resolution (`resolve`)**: The orchestrator. Expands each discovered
//!   cluster into its owned file set, inverts that into a file → cluster
//!   index, intersects the incoming diffs against it, and computes each
//!   covered cluster's subpath.
//! - **Path Arithmetic (`path`)**: Relative-path computation and the
//!   lowest-common-ancestor directory resolver that narrows a cluster's
//!   subpath to the smallest subtree containing all of its changed files.
//! - **Header Stamping (`headers`)**: Marks generated YAML files with a fixed
//!   comment header; a side-effecting utility with no role in resolution.
//!
//! ## Execution Flow
//!
//! `resolve::covered_clusters` runs a single synchronous pass:
//!
//! 1. **Discovery**: Find every cluster config surviving the filters.
//! 2. **Expansion**: Enumerate each cluster's expanded-output files.
//! 3. **Inversion**: Build the file → cluster ownership index.
//! 4. **Intersection**: Attribute each diff to the clusters owning it.
//! 5. **Subpath**: Apply the override, or compute the lowest common ancestor
//!    of each cluster's attributed files.
//! 6. **Ordering**: Return clusters sorted by declaration path.
//!
//! No state survives between invocations; every call re-walks the repository
//! tree and rebuilds the index from scratch.

pub mod config;
pub mod discovery;
pub mod error;
pub mod headers;
pub mod path;
pub mod resolve;
pub mod walk;

#[cfg(test)]
mod path_proptest;
