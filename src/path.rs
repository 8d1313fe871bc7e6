//! Relative-path arithmetic and the common-ancestor resolver
//!
//! Everything above this module works with repository-relative paths. The two
//! building blocks here are `rel_to`, which computes a path relative to a base
//! and fails loudly when the path is not under it, and `lowest_parent`, which
//! computes the deepest directory common to a set of files under a root.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Compute `path` relative to `base`.
///
/// Unlike `Path::strip_prefix` this returns a descriptive `Error::Path` when
/// `path` does not lie under `base`. There is no `..` fallback: a path outside
/// the base is a precondition violation, not something to paper over.
pub fn rel_to(base: &Path, path: &Path) -> Result<PathBuf> {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .map_err(|_| Error::Path {
            message: format!("'{}' is not under '{}'", path.display(), base.display()),
        })
}

/// Compute `path` relative to `base` as a string with `/` separators.
pub fn rel_string(base: &Path, path: &Path) -> Result<String> {
    let rel = rel_to(base, path)?;
    Ok(rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/"))
}

/// Find the deepest directory, relative to `root`, that is an ancestor of
/// every file in `files`.
///
/// Each file is resolved relative to `root`, reduced to its containing
/// directory, and split into path segments. The result is the longest shared
/// segment prefix, anchored at segment 0: the walk stops at the first index
/// where any two files disagree, with no credit for segments that happen to
/// match past the divergence point.
///
/// Edge cases:
/// - an empty `files` list yields `"."` (the root itself)
/// - files sitting directly in `root` contribute zero segments, so any such
///   file forces the result to `"."`
/// - divergence at segment 0 yields `"."`
///
/// A file that does not lie under `root` is an error.
pub fn lowest_parent<P: AsRef<Path>>(root: &Path, files: &[P]) -> Result<String> {
    if files.is_empty() {
        // No files means nothing narrows the root down
        return Ok(".".to_string());
    }

    let mut dir_segments: Vec<Vec<String>> = Vec::with_capacity(files.len());

    for file in files {
        let rel = rel_to(root, file.as_ref())?;
        let dir = rel.parent().map(Path::to_path_buf).unwrap_or_default();
        let segments: Vec<String> = dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        dir_segments.push(segments);
    }

    let min_len = dir_segments.iter().map(Vec::len).min().unwrap_or(0);

    let mut shared = 0;
    'outer: for i in 0..min_len {
        let candidate = &dir_segments[0][i];
        for segments in &dir_segments[1..] {
            if &segments[i] != candidate {
                break 'outer;
            }
        }
        shared = i + 1;
    }

    if shared == 0 {
        return Ok(".".to_string());
    }

    Ok(dir_segments[0][..shared].join("/"))
}
