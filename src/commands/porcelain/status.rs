use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusInfo;
use std::io::Write;

impl Repository {
    /// Print the status report and hand back the computed views
    pub fn query_status(&self) -> anyhow::Result<StatusInfo> {
        self.ensure_initialized()?;

        let status = self.status().initialize()?;
        write!(self.writer(), "{}", status)?;

        Ok(status)
    }
}
