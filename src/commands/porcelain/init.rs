use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the metadata layout, reporting directories that already exist
    pub fn init(&self) -> anyhow::Result<()> {
        let meta_path = self.meta_path();

        for dir in [
            meta_path.as_path(),
            self.database().images_path(),
            self.staging().path(),
        ] {
            if dir.is_dir() {
                writeln!(self.writer(), "{} already exists!", dir.display())?;
                continue;
            }

            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {:?}", dir))?;
        }

        if !self.refs().activated_path().exists() {
            self.refs()
                .set_active_branch(DEFAULT_BRANCH)
                .context("Failed to write the active branch marker")?;
        }

        tracing::info!(path = %self.path().display(), "initialized repository");
        writeln!(
            self.writer(),
            "Initialized empty wit repository in {}",
            meta_path.display()
        )?;

        Ok(())
    }
}
