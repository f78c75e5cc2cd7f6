//! Error kinds surfaced by the versioning engine
//!
//! Every engine operation returns `anyhow::Result`; the kinds below are raised as
//! `anyhow::Error` values so callers can recover them with `downcast_ref`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WitError {
    /// no `.wit` directory in the start path or any of its ancestors
    #[error("no wit repository found in {} or any of its parent directories", start.display())]
    NoRepository { start: PathBuf },

    /// a command was invoked without its required argument
    #[error("function '{command}' must have one argument: {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// checkout attempted with staged or unstaged changes
    #[error("can't checkout: some changes have to be committed first")]
    Checkout,

    #[error("branch named {0} already exists")]
    BranchExists(String),

    /// a commit was requested with a parent count other than two
    #[error("a merge commit takes exactly two parents, got {parents}")]
    Merge { parents: usize },

    #[error("unknown revision: {0}")]
    UnknownRevision(String),

    #[error("invalid branch name: {0:?}")]
    InvalidBranchName(String),

    /// the operation needs a HEAD but nothing has been committed yet
    #[error("no commits yet")]
    NoCommits,

    #[error("no common ancestor between {0} and {1}")]
    NoCommonAncestor(String, String),

    #[error("path {} is outside the repository working tree", .0.display())]
    OutsideRepository(PathBuf),
}

impl WitError {
    /// Recover the engine error kind carried by an `anyhow::Error`, if any
    pub fn kind_of(err: &anyhow::Error) -> Option<&WitError> {
        err.downcast_ref::<WitError>()
    }
}
