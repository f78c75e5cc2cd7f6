use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::diff::tree_diff::{self, TreeDiff};
use crate::artifacts::errors::WitError;
use crate::artifacts::objects::commit_id::CommitId;
use std::io::Write;
use std::path::{Path, PathBuf};

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. New commits will move HEAD only; the
active branch stays where it is until you check it out again.

If you want to keep commits you create, create a branch for them with:

    wit branch <new-branch-name>
"#;

impl Repository {
    /// Replace the working tree and staging area with a commit's snapshot
    ///
    /// Refuses to run while there are staged or unstaged changes, or while
    /// untracked files occupy paths the target needs. Checking out a
    /// branch also makes it the active branch; checking out anything else
    /// leaves the active branch marker alone, which detaches HEAD from it.
    pub fn checkout(&self, target: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let status = self.status().initialize()?;
        if !status.is_clean() {
            anyhow::bail!(WitError::Checkout);
        }

        let revision = Revision::resolve(target, self)?;

        let blocking = self.untracked_in_the_way(revision.oid())?;
        if !blocking.is_empty() {
            tracing::warn!(files = ?blocking, "untracked files would be overwritten");
            anyhow::bail!(WitError::Checkout);
        }

        self.migrate_to(revision.oid())?;
        self.refs().update_head(revision.oid().clone())?;
        if let Some(name) = revision.branch_name() {
            self.refs().set_active_branch(name)?;
        }
        tracing::info!(%target, oid = %revision.oid(), "checked out");

        match revision.branch_name() {
            Some(name) => writeln!(self.writer(), "Switched to branch '{}'", name)?,
            None => {
                write!(self.writer(), "{}", DETACHMENT_NOTICE)?;
                writeln!(
                    self.writer(),
                    "HEAD is now at {}",
                    revision.oid().to_short_id()
                )?;
            }
        }

        Ok(())
    }

    /// Untracked working-tree files occupying a path the target snapshot needs
    ///
    /// Either a directory sits where the snapshot has a file, or a file sits
    /// where the snapshot has a directory. Tracked files in those spots are
    /// cleared by the migration itself.
    fn untracked_in_the_way(&self, oid: &CommitId) -> anyhow::Result<Vec<PathBuf>> {
        let root = self.workspace().path();
        let is_tracked = |file: &Path| self.staging().path().join(file).is_file();
        let mut blocking = Vec::new();

        for file in self.database().snapshot_files(oid)? {
            let local = root.join(&file);
            if local.is_dir() {
                blocking.extend(
                    tree_diff::list_files(&local, false)?
                        .into_iter()
                        .map(|nested| file.join(nested))
                        .filter(|nested| !is_tracked(nested.as_path())),
                );
            }

            blocking.extend(
                file.ancestors()
                    .skip(1)
                    .filter(|ancestor| !ancestor.as_os_str().is_empty())
                    .filter(|ancestor| root.join(ancestor).is_file() && !is_tracked(*ancestor))
                    .map(Path::to_path_buf),
            );
        }

        blocking.sort();
        blocking.dedup();

        Ok(blocking)
    }

    /// Sync working tree and staging area to `oid`'s snapshot
    ///
    /// Tracked working-tree files absent from the target are removed; untracked
    /// files are not touched.
    fn migrate_to(&self, oid: &CommitId) -> anyhow::Result<()> {
        let snapshot = self.database().snapshot_path(oid);

        let stale = TreeDiff::new(self.staging().path(), &snapshot).only_in_source(false)?;
        for file in stale.iter() {
            self.workspace().remove_file(file)?;
        }

        for file in self.database().snapshot_files(oid)? {
            self.workspace().restore_file(&file, &snapshot.join(&file))?;
        }
        self.staging().reset_to(&snapshot)?;

        tracing::debug!(removed = stale.len(), "migrated working tree");

        Ok(())
    }
}
