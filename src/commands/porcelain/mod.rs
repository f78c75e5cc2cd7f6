//! Porcelain commands (user-facing operations)
//!
//! Each command is an `impl Repository` block operating on the repository
//! handle and writing user-facing output to the repository's writer.
//!
//! ## Commands
//!
//! - `init`: Create the metadata layout
//! - `add`: Stage files or directories
//! - `commit`: Create a commit (and merge commits)
//! - `status`: Show staged, unstaged and untracked files
//! - `checkout`: Switch to a branch or commit
//! - `branch`: Create or list branches
//! - `merge`: Merge a branch into the active branch
//! - `graph`: Print the commit graph edges
//! - `log`: Show commit history

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod graph;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
