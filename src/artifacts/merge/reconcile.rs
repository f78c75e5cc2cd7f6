use crate::areas::database::Database;
use crate::areas::staging::Staging;
use crate::areas::workspace::Workspace;
use crate::artifacts::diff::tree_diff::{self, TreeDiff};
use crate::artifacts::merge::ancestry::AncestryResolver;
use crate::artifacts::objects::commit_id::CommitId;
use std::path::PathBuf;

/// How the staging area is rebuilt for a merge commit
///
/// `ours` contributes its whole snapshot; `theirs` contributes only the files it
/// changed or added since `base`, and those win on every path collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePlan {
    ours: CommitId,
    theirs: CommitId,
    base: CommitId,
    contributed: Vec<PathBuf>,
}

impl MergePlan {
    pub fn build(database: &Database, ours: CommitId, theirs: CommitId) -> anyhow::Result<Self> {
        let resolver = AncestryResolver::new(|oid| database.read_parent(oid));
        let base = resolver.common_ancestor(&ours, &theirs)?;

        let theirs_snapshot = database.snapshot_path(&theirs);
        let base_snapshot = database.snapshot_path(&base);
        let contributed = TreeDiff::new(&theirs_snapshot, &base_snapshot).changed_or_added()?;

        tracing::info!(
            %ours,
            %theirs,
            %base,
            contributed = contributed.len(),
            "planned merge"
        );

        Ok(MergePlan {
            ours,
            theirs,
            base,
            contributed,
        })
    }

    pub fn ours(&self) -> &CommitId {
        &self.ours
    }

    pub fn theirs(&self) -> &CommitId {
        &self.theirs
    }

    pub fn base(&self) -> &CommitId {
        &self.base
    }

    pub fn contributed(&self) -> &[PathBuf] {
        &self.contributed
    }

    /// Copy the whole of `ours`, then the files `theirs` contributed
    pub fn apply_to_staging(&self, database: &Database, staging: &Staging) -> anyhow::Result<()> {
        let ours_snapshot = database.snapshot_path(&self.ours);
        for file in database.snapshot_files(&self.ours)? {
            staging.write_file(&file, &ours_snapshot.join(&file))?;
        }

        let theirs_snapshot = database.snapshot_path(&self.theirs);
        for file in self.contributed.iter() {
            staging.write_file(file, &theirs_snapshot.join(file))?;
        }

        Ok(())
    }

    /// Bring contributed files into the working tree where it is safe to
    ///
    /// A working-tree file is only overwritten when it is missing or still
    /// identical to the committed copy in `ours`. Paths blocked by a working-tree
    /// file where a directory is needed, or a directory where a file is needed,
    /// are skipped.
    ///
    /// # Returns
    ///
    /// The files written to the working tree.
    pub fn sync_workspace(
        &self,
        database: &Database,
        workspace: &Workspace,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let ours_snapshot = database.snapshot_path(&self.ours);
        let theirs_snapshot = database.snapshot_path(&self.theirs);
        let mut written = Vec::new();

        for file in self.contributed.iter() {
            let local = workspace.path().join(file);
            let committed = ours_snapshot.join(file);

            let blocked = file
                .ancestors()
                .skip(1)
                .any(|ancestor| workspace.path().join(ancestor).is_file());

            let untouched = !blocked
                && match (local.is_file(), committed.is_file()) {
                    (false, _) => !local.exists(),
                    (true, true) => tree_diff::same_content(&local, &committed)?,
                    (true, false) => false,
                };

            if untouched {
                workspace.restore_file(file, &theirs_snapshot.join(file))?;
                written.push(file.clone());
            } else {
                tracing::debug!(file = %file.display(), "kept local working tree copy");
            }
        }

        Ok(written)
    }
}
