use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::CommitMetadata;
use crate::artifacts::objects::commit_id::CommitId;
use colored::Colorize;
use std::cmp::Reverse;
use std::io::Write;

impl Repository {
    /// Print every commit reachable from HEAD, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        if self.refs().read_head()?.is_none() {
            writeln!(self.writer(), "No commits yet")?;
            return Ok(());
        }

        let mut commits = self
            .commit_graph()?
            .nodes()
            .iter()
            .map(|oid| {
                self.database()
                    .load_metadata(oid)
                    .map(|metadata| (oid.clone(), metadata))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        commits.sort_by_key(|(oid, metadata)| (Reverse(metadata.timestamp()), oid.clone()));

        for (oid, metadata) in commits.iter() {
            self.show_commit(oid, metadata)?;
        }

        Ok(())
    }

    fn show_commit(&self, oid: &CommitId, metadata: &CommitMetadata) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("commit {}", oid).yellow())?;
        if metadata.parents().is_merge() {
            writeln!(self.writer(), "Merge:  {}", metadata.parents())?;
        }
        writeln!(self.writer(), "Date:   {}", metadata.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in metadata.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }
        writeln!(self.writer())?;

        Ok(())
    }
}
