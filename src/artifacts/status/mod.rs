//! Working tree status inspection
//!
//! Three views are derived from the tree diff primitives:
//!
//! - staged changes: staging area vs. the HEAD snapshot (everything is new before the first commit)
//! - unstaged changes: staging area files whose working tree copy differs
//! - untracked files: working tree files with no staged counterpart
//!
//! ## Components
//!
//! - `file_change`: change categories and their labels
//! - `status_info`: status computation and the printed report

pub mod file_change;
pub mod status_info;
