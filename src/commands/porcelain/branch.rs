use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use std::io::Write;

impl Repository {
    /// Create a branch at the current HEAD
    pub fn branch(&self, name: &str) -> anyhow::Result<CommitId> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(name.to_string())?;
        let oid = self.refs().create_branch(&branch_name)?;
        tracing::info!(branch = %branch_name, %oid, "created branch");

        Ok(oid)
    }

    /// Print every branch in stored order, flagging the active one
    pub fn list_branches(&self) -> anyhow::Result<Vec<(String, CommitId)>> {
        self.ensure_initialized()?;

        let active_branch = self.refs().active_branch()?;
        let branches = self.refs().list_branches()?;

        for (name, oid) in branches.iter() {
            let marker = match *name == active_branch {
                true => "* ",
                false => "  ",
            };
            writeln!(self.writer(), "{}{} {}", marker, name, oid.to_short_id())?;
        }

        Ok(branches)
    }
}
