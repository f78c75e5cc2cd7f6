//! Commit history traversal
//!
//! - `commit_graph`: the DAG reachable from HEAD, as nodes and child → parent edges

pub mod commit_graph;
