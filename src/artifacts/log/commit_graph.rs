use crate::artifacts::objects::commit::Parents;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::{HashSet, VecDeque};

/// The commit DAG reachable from one tip
///
/// Nodes are listed in breadth-first discovery order starting with the tip;
/// every edge points from a child to one of its parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGraph {
    nodes: Vec<CommitId>,
    edges: Vec<(CommitId, CommitId)>,
}

impl CommitGraph {
    pub fn build<ParentLoaderFn>(
        tip: &CommitId,
        parent_loader: ParentLoaderFn,
    ) -> anyhow::Result<Self>
    where
        ParentLoaderFn: Fn(&CommitId) -> anyhow::Result<Parents>,
    {
        let mut graph = CommitGraph::default();
        let mut seen = HashSet::from([tip.clone()]);
        let mut queue = VecDeque::from([tip.clone()]);

        while let Some(oid) = queue.pop_front() {
            for parent in parent_loader(&oid)?.ids() {
                graph.edges.push((oid.clone(), parent.clone()));

                if seen.insert(parent.clone()) {
                    queue.push_back(parent.clone());
                }
            }
            graph.nodes.push(oid);
        }

        Ok(graph)
    }

    pub fn nodes(&self) -> &[CommitId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(CommitId, CommitId)] {
        &self.edges
    }
}
