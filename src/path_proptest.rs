//! Property-based tests for path manipulation functions.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{lowest_parent, rel_string};
    use proptest::prelude::*;
    use std::path::Path;

    /// Strategy for a single path segment
    fn segment() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,8}"
    }

    /// Strategy for a list of files under the root "r", each with 0..4
    /// directory segments.
    fn files_under_root() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            (prop::collection::vec(segment(), 0..4), segment()).prop_map(|(dirs, name)| {
                let mut parts = vec!["r".to_string()];
                parts.extend(dirs);
                parts.push(format!("{}.yaml", name));
                parts.join("/")
            }),
            1..8,
        )
    }

    proptest! {
        /// Property: the result is a directory prefix of every file's
        /// relative directory.
        #[test]
        fn lowest_parent_is_prefix_of_every_file_dir(files in files_under_root()) {
            let root = Path::new("r");
            let parent = lowest_parent(root, &files).unwrap();

            for file in &files {
                let rel = rel_string(root, Path::new(file)).unwrap();
                let dir = match rel.rsplit_once('/') {
                    Some((dir, _)) => dir.to_string(),
                    None => String::new(),
                };

                if parent != "." {
                    prop_assert!(
                        dir == parent || dir.starts_with(&format!("{}/", parent)),
                        "'{}' is not a prefix of '{}' (file '{}')",
                        parent,
                        dir,
                        file
                    );
                }
            }
        }

        /// Property: the result is maximal. Extending it by the next segment
        /// of any file's directory must exclude at least one other file.
        #[test]
        fn lowest_parent_is_maximal(files in files_under_root()) {
            let root = Path::new("r");
            let parent = lowest_parent(root, &files).unwrap();

            let dirs: Vec<Vec<String>> = files
                .iter()
                .map(|f| {
                    let rel = rel_string(root, Path::new(f)).unwrap();
                    let mut segs: Vec<String> =
                        rel.split('/').map(str::to_string).collect();
                    segs.pop(); // drop the filename
                    segs
                })
                .collect();

            let depth = if parent == "." { 0 } else { parent.split('/').count() };

            // A deeper common directory would require every file to have a
            // segment at `depth` and all of those segments to agree.
            let extendable = dirs.iter().all(|d| d.len() > depth)
                && dirs.iter().all(|d| d[depth] == dirs[0][depth]);
            prop_assert!(!extendable, "result '{}' is not maximal", parent);
        }

        /// Property: lowest_parent is deterministic
        #[test]
        fn lowest_parent_is_deterministic(files in files_under_root()) {
            let root = Path::new("r");
            let result1 = lowest_parent(root, &files).unwrap();
            let result2 = lowest_parent(root, &files).unwrap();
            prop_assert_eq!(result1, result2);
        }

        /// Property: all files in the same directory resolve to that directory
        #[test]
        fn lowest_parent_of_shared_directory_is_that_directory(
            dirs in prop::collection::vec(segment(), 1..4),
            names in prop::collection::vec(segment(), 1..5),
        ) {
            let dir = dirs.join("/");
            let files: Vec<String> = names
                .iter()
                .map(|n| format!("r/{}/{}.yaml", dir, n))
                .collect();

            let parent = lowest_parent(Path::new("r"), &files).unwrap();
            prop_assert_eq!(parent, dir);
        }
    }
}
