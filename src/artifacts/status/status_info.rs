use crate::areas::repository::Repository;
use crate::artifacts::diff::tree_diff::TreeDiff;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::file_change::{FileChangeType, IndexChangeType, WorkspaceChangeType};
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

pub type ChangeSet = BTreeMap<PathBuf, FileChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) head: Option<CommitId>,
    pub(crate) active_branch: String,
    pub(crate) detached: bool,
    pub(crate) index_changeset: ChangeSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

impl StatusInfo {
    pub fn head(&self) -> Option<&CommitId> {
        self.head.as_ref()
    }

    pub fn active_branch(&self) -> &str {
        &self.active_branch
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Staging area vs. last commit
    pub fn staged(&self) -> FileSet {
        self.index_changeset.keys().cloned().collect()
    }

    /// Working tree vs. staging area
    pub fn unstaged(&self) -> FileSet {
        self.workspace_changeset.keys().cloned().collect()
    }

    pub fn untracked(&self) -> &FileSet {
        &self.untracked_files
    }

    /// No staged and no unstaged changes; untracked files do not count
    pub fn is_clean(&self) -> bool {
        self.index_changeset.is_empty() && self.workspace_changeset.is_empty()
    }

    fn write_changeset(
        f: &mut std::fmt::Formatter<'_>,
        title: &str,
        changeset: &ChangeSet,
    ) -> std::fmt::Result {
        writeln!(f, "{}", title)?;
        for (file, change) in changeset.iter() {
            writeln!(f, "{}{}", change, file.display())?;
        }

        Ok(())
    }
}

impl std::fmt::Display for StatusInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.head, self.detached) {
            (Some(head), true) => writeln!(f, "HEAD detached at {}", head.to_short_id())?,
            _ => writeln!(f, "On branch {}", self.active_branch)?,
        }

        match &self.head {
            Some(head) => writeln!(f, "Current id: {}", head)?,
            None => writeln!(f, "Current id: None")?,
        }

        writeln!(f)?;
        Self::write_changeset(f, "Changes to be committed:", &self.index_changeset)?;
        writeln!(f)?;
        Self::write_changeset(f, "Changes not staged for commit:", &self.workspace_changeset)?;
        writeln!(f)?;

        let untracked = self
            .untracked_files
            .iter()
            .map(|file| {
                (
                    file.clone(),
                    FileChangeType::Workspace(WorkspaceChangeType::Untracked),
                )
            })
            .collect::<ChangeSet>();
        Self::write_changeset(f, "Untracked files:", &untracked)
    }
}

/// Computes the three status views of a repository
#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self) -> anyhow::Result<StatusInfo> {
        let refs = self.repository.refs();
        let head = refs.read_head()?;

        Ok(StatusInfo {
            active_branch: refs.active_branch()?,
            detached: refs.is_detached()?,
            index_changeset: self.index_changes(head.as_ref())?,
            workspace_changeset: self.workspace_changes()?,
            untracked_files: self.untracked_files()?,
            head,
        })
    }

    fn index_changes(&self, head: Option<&CommitId>) -> anyhow::Result<ChangeSet> {
        let staging = self.repository.staging().path();

        let Some(head) = head else {
            return Ok(self
                .repository
                .staging()
                .list_files()?
                .into_iter()
                .map(|file| (file, FileChangeType::Index(IndexChangeType::Added)))
                .collect());
        };

        let snapshot = self.repository.database().snapshot_path(head);
        let diff = TreeDiff::new(staging, &snapshot);

        let modified = diff
            .changed()?
            .into_iter()
            .map(|file| (file, FileChangeType::Index(IndexChangeType::Modified)));
        let added = diff
            .only_in_source(false)?
            .into_iter()
            .map(|file| (file, FileChangeType::Index(IndexChangeType::Added)));

        Ok(modified.chain(added).collect())
    }

    fn workspace_changes(&self) -> anyhow::Result<ChangeSet> {
        let diff = TreeDiff::new(
            self.repository.staging().path(),
            self.repository.workspace().path(),
        );

        Ok(diff
            .changed()?
            .into_iter()
            .map(|file| (file, FileChangeType::Workspace(WorkspaceChangeType::Modified)))
            .collect())
    }

    fn untracked_files(&self) -> anyhow::Result<FileSet> {
        let diff = TreeDiff::new(
            self.repository.workspace().path(),
            self.repository.staging().path(),
        );

        Ok(diff.only_in_source(false)?.into_iter().collect())
    }
}
