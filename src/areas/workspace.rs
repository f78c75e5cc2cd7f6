//! Working tree access and path resolution
//!
//! The workspace is the user's directory tree. It also hosts the path resolver:
//! locating the repository root from any directory, and translating user paths
//! into working-tree-relative and absolute forms.

use crate::artifacts::core;
use crate::artifacts::errors::WitError;
use std::path::{Component, Path, PathBuf};

/// Name of the repository metadata directory
pub const META_DIR: &str = ".wit";

const IGNORED_PATHS: [&str; 3] = [META_DIR, ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk upward from `start` until a directory holding `.wit` is found
    ///
    /// # Returns
    ///
    /// The path of the `.wit` directory itself, or `None` once the filesystem
    /// root has been passed without finding one.
    pub fn locate_repository_root(start: &Path) -> Option<PathBuf> {
        let mut current = Some(start);

        while let Some(dir) = current {
            let candidate = dir.join(META_DIR);
            if candidate.is_dir() {
                return Some(candidate);
            }
            current = dir.parent();
        }

        None
    }

    /// Normalize a user path into `(relative, absolute)` forms
    ///
    /// Relative inputs are taken relative to `cwd`, which must lie inside the
    /// working tree. Paths that escape the working tree are rejected.
    pub fn resolve(&self, cwd: &Path, path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
        let absolute = match path.is_absolute() {
            true => path.to_path_buf(),
            false => cwd.join(path),
        };
        let absolute = match absolute.canonicalize() {
            Ok(canonical) => canonical,
            Err(_) => Self::normalize(&absolute),
        };

        let relative = absolute
            .strip_prefix(self.path.as_ref())
            .map_err(|_| WitError::OutsideRepository(absolute.clone()))?
            .to_path_buf();

        Ok((relative, absolute))
    }

    /// Lexical normalization for paths that do not exist (yet)
    fn normalize(path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();

        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other.as_os_str()),
            }
        }

        normalized
    }

    /// Whether a path lies inside the repository metadata
    pub fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    /// Overwrite a working-tree file with a copy of `source`
    pub fn restore_file(&self, file_path: &Path, source: &Path) -> anyhow::Result<()> {
        core::copy_file(source, &self.path.join(file_path))
    }

    /// Delete a working-tree file and any directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        core::remove_file(&self.path, file_path)
    }
}
