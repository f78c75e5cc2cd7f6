//! Merging two lines of history
//!
//! - `ancestry`: parent chains and merge base selection
//! - `reconcile`: rebuilding the staging area (and working tree) for a merge commit
//!
//! Reconciliation is asymmetric and silent: files changed by the merged branch
//! since the merge base replace the active branch's copies, everything else
//! comes from the active branch. There is no conflict detection.

pub mod ancestry;
pub mod reconcile;
