use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::branch::REF_ALIASES;
use crate::artifacts::errors::WitError;
use crate::artifacts::objects::commit_id::CommitId;

/// A checkout or merge target after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// a branch name together with the commit it points to
    Branch { name: String, oid: CommitId },
    /// a raw commit identifier, or HEAD
    Commit(CommitId),
}

impl Revision {
    /// Resolve a user-supplied target
    ///
    /// Aliases are expanded first, then reference names are looked up, then the
    /// target is tried as the id of a stored commit.
    pub fn resolve(target: &str, repository: &Repository) -> anyhow::Result<Self> {
        let revision = REF_ALIASES.get(target).copied().unwrap_or(target);

        if let Some(references) = repository.refs().load()? {
            if revision == HEAD_REF_NAME {
                return Ok(Revision::Commit(references.head().clone()));
            }

            if let Some(oid) = references.branch(revision) {
                return Ok(Revision::Branch {
                    name: revision.to_string(),
                    oid: oid.clone(),
                });
            }
        }

        match CommitId::try_parse(revision.to_string()) {
            Ok(oid) if repository.database().contains(&oid) => Ok(Revision::Commit(oid)),
            _ => Err(WitError::UnknownRevision(target.to_string()).into()),
        }
    }

    pub fn oid(&self) -> &CommitId {
        match self {
            Revision::Branch { oid, .. } => oid,
            Revision::Commit(oid) => oid,
        }
    }

    pub fn branch_name(&self) -> Option<&str> {
        match self {
            Revision::Branch { name, .. } => Some(name),
            Revision::Commit(_) => None,
        }
    }
}
