use crate::areas::repository::Repository;
use crate::artifacts::errors::WitError;
use crate::artifacts::log::commit_graph::CommitGraph;
use std::io::Write;

impl Repository {
    /// The DAG reachable from HEAD
    pub fn commit_graph(&self) -> anyhow::Result<CommitGraph> {
        let head = self.refs().read_head()?.ok_or(WitError::NoCommits)?;

        CommitGraph::build(&head, |oid| self.database().read_parent(oid))
    }

    /// Print one `child parent` edge per line
    pub fn graph(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let graph = self.commit_graph()?;
        match graph.edges() {
            [] => {
                for node in graph.nodes() {
                    writeln!(self.writer(), "{}", node)?;
                }
            }
            edges => {
                for (child, parent) in edges {
                    writeln!(self.writer(), "{} {}", child, parent)?;
                }
            }
        }

        Ok(())
    }
}
