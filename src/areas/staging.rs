//! Staging area
//!
//! A directory mirroring the working tree layout that holds the files queued for
//! the next commit. Staging is additive: a path is copied in (recursively for
//! directories) and overwrites any earlier staged copy, while files that were not
//! named are left as they are. Checkout resets the whole area to a snapshot.

use crate::areas::workspace::Workspace;
use crate::artifacts::core;
use crate::artifacts::diff::tree_diff::{self, TreeDiff};
use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Staging {
    /// Path to the staging directory (typically `.wit/staging_area`)
    path: Box<Path>,
}

impl Staging {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy a working-tree file or directory into the staging area
    ///
    /// # Returns
    ///
    /// The working-tree-relative paths of every file staged.
    pub fn stage(&self, workspace: &Workspace, relative: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let source = workspace.path().join(relative);

        if !source.exists() {
            anyhow::bail!("pathspec {:?} did not match any files", relative);
        }

        let files = if source.is_dir() {
            tree_diff::list_files(&source, false)?
                .into_iter()
                .map(|file| relative.join(file))
                .collect::<Vec<_>>()
        } else {
            vec![relative.to_path_buf()]
        };

        for file in files.iter() {
            core::replace_file(&workspace.path().join(file), &self.path.join(file))?;
        }

        Ok(files)
    }

    pub fn list_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        tree_diff::list_files(&self.path, false)
    }

    /// Overwrite the staged copy of `file` with `source`
    pub fn write_file(&self, file: &Path, source: &Path) -> anyhow::Result<()> {
        core::replace_file(source, &self.path.join(file))
    }

    /// Make the staging area an exact copy of `snapshot`
    pub fn reset_to(&self, snapshot: &Path) -> anyhow::Result<()> {
        for stale in TreeDiff::new(&self.path, snapshot).only_in_source(false)? {
            core::remove_file(&self.path, &stale)?;
        }

        for file in tree_diff::list_files(snapshot, false)? {
            self.write_file(&file, &snapshot.join(&file))?;
        }

        Ok(())
    }
}
