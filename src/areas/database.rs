//! Commit store
//!
//! Append-only collection of snapshots under `.wit/images`. Each commit owns a
//! directory `images/<id>/` holding a full copy of the staging area at creation
//! time, and a sidecar `images/<id>.txt` holding its metadata. Neither is ever
//! rewritten once created.

use crate::artifacts::core;
use crate::artifacts::diff::tree_diff;
use crate::artifacts::objects::commit::{CommitMetadata, Parents};
use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use std::path::{Path, PathBuf};

const METADATA_EXTENSION: &str = "txt";

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn images_path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot_path(&self, oid: &CommitId) -> PathBuf {
        self.path.join(oid.as_ref())
    }

    pub fn metadata_path(&self, oid: &CommitId) -> PathBuf {
        self.path
            .join(oid.as_ref())
            .with_extension(METADATA_EXTENSION)
    }

    pub fn contains(&self, oid: &CommitId) -> bool {
        self.snapshot_path(oid).is_dir()
    }

    /// Files of a commit's snapshot, relative to the snapshot root
    pub fn snapshot_files(&self, oid: &CommitId) -> anyhow::Result<Vec<PathBuf>> {
        tree_diff::list_files(&self.snapshot_path(oid), false)
    }

    /// Draw a commit id that no stored commit uses yet
    pub fn generate_commit_id(&self) -> CommitId {
        CommitId::generate_unique(|candidate| {
            self.snapshot_path(candidate).exists() || self.metadata_path(candidate).exists()
        })
    }

    /// Write a new commit: metadata sidecar plus a full copy of `staging`
    pub fn store(
        &self,
        oid: &CommitId,
        metadata: &CommitMetadata,
        staging: &Path,
    ) -> anyhow::Result<()> {
        let snapshot_path = self.snapshot_path(oid);
        if snapshot_path.exists() {
            anyhow::bail!("commit {} already exists", oid);
        }

        std::fs::create_dir_all(&snapshot_path).with_context(|| {
            format!("Unable to create snapshot directory {:?}", snapshot_path)
        })?;

        let metadata_path = self.metadata_path(oid);
        std::fs::write(&metadata_path, metadata.serialize())
            .with_context(|| format!("Unable to write commit metadata {:?}", metadata_path))?;

        for file in tree_diff::list_files(staging, false)? {
            core::copy_file(&staging.join(&file), &snapshot_path.join(&file))?;
        }

        Ok(())
    }

    pub fn load_metadata(&self, oid: &CommitId) -> anyhow::Result<CommitMetadata> {
        let metadata_path = self.metadata_path(oid);
        let content = std::fs::read_to_string(&metadata_path)
            .with_context(|| format!("Unable to read commit metadata {:?}", metadata_path))?;

        CommitMetadata::deserialize(&content)
            .with_context(|| format!("Corrupted commit metadata for {}", oid))
    }

    /// Parent identifiers recorded for a commit
    pub fn read_parent(&self, oid: &CommitId) -> anyhow::Result<Parents> {
        Ok(self.load_metadata(oid)?.parents().clone())
    }

    /// Every stored commit id, in id order
    pub fn list_commits(&self) -> anyhow::Result<Vec<CommitId>> {
        let mut commits = std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to list commits in {:?}", self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| CommitId::try_parse(entry.file_name().to_string_lossy().into()).ok())
            .collect::<Vec<_>>();
        commits.sort();

        Ok(commits)
    }
}
