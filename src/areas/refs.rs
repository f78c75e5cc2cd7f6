//! Reference store (branches, HEAD) and the active branch marker
//!
//! References are human-readable names pointing to commits. They all live in a
//! single ordered text file:
//!
//! ```text
//! HEAD=<id>
//! master=<id>
//! <branch>=<id>
//! ...
//! ```
//!
//! `HEAD` is always the first line and `master` the second. User branches
//! follow in creation order and are never reordered. The file only exists once
//! the first commit has been made; until then every lookup yields `None`.
//!
//! The active branch marker is a separate file holding the name of the branch
//! the working tree follows.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::errors::WitError;
use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Branch created together with the first commit
pub const DEFAULT_BRANCH: &str = "master";

const REFERENCES_FILE: &str = "references.txt";
const ACTIVATED_FILE: &str = "activated.txt";

/// In-memory view of `references.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References {
    entries: Vec<(String, CommitId)>,
}

impl References {
    /// References created by the first commit: HEAD and master both on it
    pub fn initial(oid: CommitId) -> Self {
        Self {
            entries: vec![
                (HEAD_REF_NAME.to_string(), oid.clone()),
                (DEFAULT_BRANCH.to_string(), oid),
            ],
        }
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let (name, oid) = line
                    .split_once('=')
                    .with_context(|| format!("malformed reference entry: {line}"))?;
                Ok((
                    name.trim().to_string(),
                    CommitId::try_parse(oid.trim().to_string())?,
                ))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        match entries.as_slice() {
            [(head, _), (master, _), ..] if head == HEAD_REF_NAME && master == DEFAULT_BRANCH => {
                Ok(Self { entries })
            }
            _ => anyhow::bail!(
                "malformed reference store: expected {HEAD_REF_NAME} and {DEFAULT_BRANCH} first"
            ),
        }
    }

    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(name, oid)| format!("{name}={oid}\n"))
            .collect()
    }

    pub fn head(&self) -> &CommitId {
        &self.entries[0].1
    }

    /// Look up any reference, HEAD included
    pub fn get(&self, name: &str) -> Option<&CommitId> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, oid)| oid)
    }

    /// Look up a branch; HEAD is not a branch
    pub fn branch(&self, name: &str) -> Option<&CommitId> {
        self.branches()
            .find(|(entry, _)| *entry == name)
            .map(|(_, oid)| oid)
    }

    pub fn branches(&self) -> impl Iterator<Item = (&str, &CommitId)> {
        self.entries
            .iter()
            .skip(1)
            .map(|(name, oid)| (name.as_str(), oid))
    }

    /// Rewrite the matching entry in place
    pub fn set(&mut self, name: &str, oid: CommitId) -> anyhow::Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(entry, _)| entry == name)
            .with_context(|| format!("reference {name} not found"))?;
        entry.1 = oid;

        Ok(())
    }

    pub fn push_branch(&mut self, name: &BranchName, oid: CommitId) {
        self.entries.push((name.to_string(), oid));
    }
}

/// Reference store manager
///
/// Reads and writes `references.txt` and `activated.txt` inside the metadata
/// directory.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.wit`)
    path: Box<Path>,
}

impl Refs {
    pub fn references_path(&self) -> PathBuf {
        self.path.join(REFERENCES_FILE)
    }

    pub fn activated_path(&self) -> PathBuf {
        self.path.join(ACTIVATED_FILE)
    }

    /// Load the reference store
    ///
    /// # Returns
    ///
    /// `None` when the store does not exist yet (no commits), an error when it
    /// exists but cannot be read or parsed.
    pub fn load(&self) -> anyhow::Result<Option<References>> {
        let path = self.references_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read references at {:?}", path))?;

        References::parse(&content).map(Some)
    }

    pub(crate) fn save(&self, references: &References) -> anyhow::Result<()> {
        let path = self.references_path();

        std::fs::write(&path, references.serialize())
            .with_context(|| format!("failed to write references at {:?}", path))
    }

    pub fn get(&self, name: &str) -> anyhow::Result<Option<CommitId>> {
        Ok(self
            .load()?
            .and_then(|references| references.get(name).cloned()))
    }

    pub fn read_head(&self) -> anyhow::Result<Option<CommitId>> {
        self.get(HEAD_REF_NAME)
    }

    /// Point `name` at `oid`, rewriting its entry in place
    pub fn set(&self, name: &str, oid: CommitId) -> anyhow::Result<()> {
        let mut references = self.load()?.ok_or(WitError::NoCommits)?;
        references.set(name, oid)?;

        self.save(&references)
    }

    pub fn update_head(&self, oid: CommitId) -> anyhow::Result<()> {
        self.set(HEAD_REF_NAME, oid)
    }

    /// Create the store with HEAD and master both on `oid`
    pub fn initialize(&self, oid: CommitId) -> anyhow::Result<()> {
        self.save(&References::initial(oid))
    }

    /// Append a branch pointing at the current HEAD
    pub fn create_branch(&self, name: &BranchName) -> anyhow::Result<CommitId> {
        let mut references = self.load()?.ok_or(WitError::NoCommits)?;

        if references.branch(name.as_ref()).is_some() {
            anyhow::bail!(WitError::BranchExists(name.to_string()));
        }

        let head = references.head().clone();
        references.push_branch(name, head.clone());
        self.save(&references)?;

        Ok(head)
    }

    pub fn list_branches(&self) -> anyhow::Result<Vec<(String, CommitId)>> {
        Ok(self
            .load()?
            .map(|references| {
                references
                    .branches()
                    .map(|(name, oid)| (name.to_string(), oid.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Name of the branch the working tree follows
    pub fn active_branch(&self) -> anyhow::Result<String> {
        let path = self.activated_path();
        if !path.exists() {
            return Ok(DEFAULT_BRANCH.to_string());
        }

        let name = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read active branch at {:?}", path))?;

        Ok(name.trim().to_string())
    }

    pub fn set_active_branch(&self, name: &str) -> anyhow::Result<()> {
        let path = self.activated_path();

        std::fs::write(&path, name)
            .with_context(|| format!("failed to write active branch at {:?}", path))
    }

    /// Whether HEAD has moved away from the active branch's reference
    pub fn is_detached(&self) -> anyhow::Result<bool> {
        let Some(references) = self.load()? else {
            return Ok(false);
        };
        let active = self.active_branch()?;

        Ok(references.branch(&active) != Some(references.head()))
    }
}
