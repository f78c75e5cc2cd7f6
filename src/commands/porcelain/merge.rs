use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::errors::WitError;
use crate::artifacts::merge::ancestry::{AncestryResolver, ParentChain};
use crate::artifacts::objects::commit_id::CommitId;
use std::io::Write;

impl Repository {
    /// Merge `branch_name` into the active branch as a two-parent commit
    pub fn merge(&self, branch_name: &str) -> anyhow::Result<CommitId> {
        self.ensure_initialized()?;

        let activated = self.refs().active_branch()?;
        let ours = self.refs().get(&activated)?.ok_or(WitError::NoCommits)?;
        let theirs = Revision::resolve(branch_name, self)?.oid().clone();

        let message = format!("merge {} into {}", branch_name, activated);
        let (oid, plan) = self.write_commit(&message, Some(&[ours, theirs][..]))?;

        if let Some(plan) = plan {
            let written = plan.sync_workspace(self.database(), self.workspace())?;
            tracing::debug!(
                contributed = plan.contributed().len(),
                written = written.len(),
                "synced merged files into working tree"
            );

            writeln!(
                self.writer(),
                "Merged {} into {} (base {}): {}",
                plan.theirs().to_short_id(),
                activated,
                plan.base().to_short_id(),
                oid.to_short_id()
            )?;
        }

        Ok(oid)
    }

    /// Every ancestor of a branch or commit, mapped to its direct parents
    pub fn parent_chain(&self, name: &str) -> anyhow::Result<ParentChain> {
        let start = Revision::resolve(name, self)?;
        let resolver = AncestryResolver::new(|oid| self.database().read_parent(oid));

        resolver.parent_chain(start.oid())
    }

    /// Merge base of two branches or commits
    pub fn common_ancestor(&self, source: &str, target: &str) -> anyhow::Result<CommitId> {
        let source = Revision::resolve(source, self)?;
        let target = Revision::resolve(target, self)?;
        let resolver = AncestryResolver::new(|oid| self.database().read_parent(oid));

        resolver.common_ancestor(source.oid(), target.oid())
    }
}
