use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::errors::WitError;
use std::path::Path;

impl Repository {
    /// Stage a file, or a directory recursively, from the working tree
    pub fn add(&self, path: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let (relative, absolute) = self.resolve(Path::new(path))?;
        if Workspace::is_ignored(&relative) {
            anyhow::bail!(WitError::OutsideRepository(absolute));
        }

        let staged = self.staging().stage(self.workspace(), &relative)?;
        tracing::info!(path = %relative.display(), files = staged.len(), "staged");

        Ok(())
    }
}
