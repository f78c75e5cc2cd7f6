//! On-disk areas of a repository
//!
//! Each area owns one piece of persisted state:
//!
//! - `workspace`: the working tree, plus repository discovery and path resolution
//! - `staging`: the staging area mirroring the working tree
//! - `database`: immutable commit snapshots and their metadata
//! - `refs`: branch references, HEAD and the active branch marker
//! - `repository`: the handle tying all of the above together

pub mod database;
pub mod refs;
pub mod repository;
pub mod staging;
pub mod workspace;
