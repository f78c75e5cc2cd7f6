use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::staging::Staging;
use crate::areas::workspace::{META_DIR, Workspace};
use crate::artifacts::errors::WitError;
use crate::artifacts::status::status_info::Status;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub const IMAGES_DIR: &str = "images";
pub const STAGING_DIR: &str = "staging_area";

/// Explicit handle on one repository
///
/// Built once from a working-tree root and passed by reference to every
/// operation; nothing reads the process working directory after construction.
pub struct Repository {
    path: Box<Path>,
    cwd: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    staging: Staging,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open (or prepare) the repository whose working tree is `path`
    ///
    /// The directory is created when missing; the metadata directory is not,
    /// that is left to `init`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory {:?}", path))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {:?}", path))?;
        let meta_path = path.join(META_DIR);

        Ok(Repository {
            cwd: path.clone().into_boxed_path(),
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            staging: Staging::new(meta_path.join(STAGING_DIR).into_boxed_path()),
            database: Database::new(meta_path.join(IMAGES_DIR).into_boxed_path()),
            refs: Refs::new(meta_path.into_boxed_path()),
            path: path.into_boxed_path(),
        })
    }

    /// Locate the repository enclosing `start` and open it
    ///
    /// Relative paths given to later operations are resolved against `start`.
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("Failed to resolve {:?}", start))?;
        let meta_path =
            Workspace::locate_repository_root(&start).ok_or_else(|| WitError::NoRepository {
                start: start.clone(),
            })?;
        let root = meta_path.parent().ok_or_else(|| WitError::NoRepository {
            start: start.clone(),
        })?;

        let mut repository = Self::new(root, writer)?;
        repository.cwd = start.into_boxed_path();
        tracing::debug!(root = %repository.path.display(), "opened repository");

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn meta_path(&self) -> PathBuf {
        self.path.join(META_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn status(&'_ self) -> Status<'_> {
        Status::new(self)
    }

    /// Resolve a user path against the directory the repository was opened from
    pub fn resolve(&self, path: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
        self.workspace.resolve(&self.cwd, path)
    }

    /// Fail with `NoRepository` unless `init` has run here
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.meta_path().is_dir() {
            anyhow::bail!(WitError::NoRepository {
                start: self.path.to_path_buf(),
            });
        }

        Ok(())
    }
}
