//! Tree comparison
//!
//! Directory trees (working tree, staging area, snapshots) are compared by
//! relative path and byte content:
//!
//! - `tree_diff::list_files`: recursive enumeration of a tree
//! - `TreeDiff::changed`: paths present in both trees with different content
//! - `TreeDiff::only_in_source`: paths of the source tree missing from the target

pub mod tree_diff;
