use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::errors::WitError;
use crate::artifacts::merge::reconcile::MergePlan;
use crate::artifacts::objects::commit::{CommitMetadata, Parents};
use crate::artifacts::objects::commit_id::CommitId;
use std::io::Write;

impl Repository {
    pub fn commit(&self, message: &str) -> anyhow::Result<CommitId> {
        self.ensure_initialized()?;

        let oid = self.create_commit(message, None)?;
        let metadata = self.database().load_metadata(&oid)?;

        let branch = match self.refs().is_detached()? {
            true => "detached HEAD".to_string(),
            false => self.refs().active_branch()?,
        };
        let is_root = match metadata.parents().is_root() {
            true => "(root-commit) ",
            false => "",
        };

        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            branch,
            is_root,
            oid.to_short_id(),
            metadata.short_message()
        )?;

        Ok(oid)
    }

    /// Snapshot the staging area as a new commit
    ///
    /// Without `parents` the commit's parent is the current HEAD (none for the
    /// first commit). Two parents make a merge commit: the staging area is
    /// reconciled from both sides before the snapshot is taken. Any other count
    /// is rejected before anything is written.
    pub fn create_commit(
        &self,
        message: &str,
        parents: Option<&[CommitId]>,
    ) -> anyhow::Result<CommitId> {
        self.write_commit(message, parents).map(|(oid, _)| oid)
    }

    pub(crate) fn write_commit(
        &self,
        message: &str,
        parents: Option<&[CommitId]>,
    ) -> anyhow::Result<(CommitId, Option<MergePlan>)> {
        let previous_head = self.refs().read_head()?;

        let (parents, plan) = match parents {
            None => (Parents::from(previous_head.clone()), None),
            Some([ours, theirs]) => {
                let plan = MergePlan::build(self.database(), ours.clone(), theirs.clone())?;
                plan.apply_to_staging(self.database(), self.staging())?;

                (Parents::Two(ours.clone(), theirs.clone()), Some(plan))
            }
            Some(other) => anyhow::bail!(WitError::Merge {
                parents: other.len()
            }),
        };

        let oid = self.database().generate_commit_id();
        let metadata = CommitMetadata::now(parents, message.to_string());
        self.database()
            .store(&oid, &metadata, self.staging().path())?;
        tracing::info!(%oid, parents = %metadata.parents(), "created commit");

        self.advance_refs(previous_head.as_ref(), &oid)?;

        Ok((oid, plan))
    }

    /// Move HEAD to `oid`, and the active branch with it unless HEAD was detached
    fn advance_refs(&self, previous_head: Option<&CommitId>, oid: &CommitId) -> anyhow::Result<()> {
        let Some(mut references) = self.refs().load()? else {
            return self.refs().initialize(oid.clone());
        };

        let active_branch = self.refs().active_branch()?;
        if references.branch(&active_branch) == previous_head {
            references.set(&active_branch, oid.clone())?;
            tracing::info!(branch = %active_branch, %oid, "advanced branch");
        } else {
            tracing::info!(branch = %active_branch, "HEAD is detached, branch left in place");
        }

        references.set(HEAD_REF_NAME, oid.clone())?;
        self.refs().save(&references)
    }
}
