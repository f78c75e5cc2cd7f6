//! Commit metadata sidecar
//!
//! Every snapshot directory `images/<id>/` has a sibling `images/<id>.txt`
//! describing it. The fields come in a fixed order:
//!
//! ```text
//! parent=<id>|<id>, <id>|None
//! date=<local timestamp> <utc offset>
//! message=<free text, may span lines>
//! ```

use crate::artifacts::objects::commit_id::CommitId;
use anyhow::Context;
use derive_new::new;

/// Format of the `date=` field, e.g. `Mon Oct  5 14:03:01 2026 +0300`
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y %z";

/// Environment variable overriding the commit timestamp
pub const DATE_ENV: &str = "WIT_DATE";

const PARENT_FIELD: &str = "parent=";
const DATE_FIELD: &str = "date=";
const MESSAGE_FIELD: &str = "message=";
const NO_PARENT: &str = "None";
const PARENT_SEPARATOR: &str = ", ";

/// Parent identifiers of a commit
///
/// Only the root commit has none; a merge commit has two.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Parents {
    #[default]
    None,
    One(CommitId),
    Two(CommitId, CommitId),
}

impl Parents {
    pub fn from_ids(ids: Vec<CommitId>) -> anyhow::Result<Self> {
        let mut ids = ids.into_iter();

        match (ids.next(), ids.next(), ids.next()) {
            (None, _, _) => Ok(Parents::None),
            (Some(first), None, _) => Ok(Parents::One(first)),
            (Some(first), Some(second), None) => Ok(Parents::Two(first, second)),
            _ => anyhow::bail!("a commit has at most two parents"),
        }
    }

    pub fn ids(&self) -> Vec<&CommitId> {
        match self {
            Parents::None => vec![],
            Parents::One(parent) => vec![parent],
            Parents::Two(first, second) => vec![first, second],
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Parents::None)
    }

    pub fn is_merge(&self) -> bool {
        matches!(self, Parents::Two(..))
    }

    fn parse(field: &str) -> anyhow::Result<Self> {
        let field = field.trim();

        if field == NO_PARENT || field.is_empty() {
            return Ok(Parents::None);
        }

        let ids = field
            .split(PARENT_SEPARATOR)
            .map(|id| CommitId::try_parse(id.trim().to_string()))
            .collect::<anyhow::Result<Vec<_>>>()?;

        Self::from_ids(ids)
    }
}

impl From<Option<CommitId>> for Parents {
    fn from(parent: Option<CommitId>) -> Self {
        match parent {
            Some(parent) => Parents::One(parent),
            None => Parents::None,
        }
    }
}

impl std::fmt::Display for Parents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parents::None => write!(f, "{}", NO_PARENT),
            Parents::One(parent) => write!(f, "{}", parent),
            Parents::Two(first, second) => {
                write!(f, "{}{}{}", first, PARENT_SEPARATOR, second)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitMetadata {
    parents: Parents,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    message: String,
}

impl CommitMetadata {
    /// Metadata stamped with the current local time, or with `WIT_DATE` when set
    pub fn now(parents: Parents, message: String) -> Self {
        let timestamp =
            Self::timestamp_from_env().unwrap_or_else(|| chrono::Local::now().fixed_offset());

        Self::new(parents, timestamp, message)
    }

    fn timestamp_from_env() -> Option<chrono::DateTime<chrono::FixedOffset>> {
        std::env::var(DATE_ENV).ok().and_then(|date_str| {
            chrono::DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        })
    }

    pub fn parents(&self) -> &Parents {
        &self.parents
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }

    pub fn serialize(&self) -> String {
        format!(
            "{PARENT_FIELD}{}\n{DATE_FIELD}{}\n{MESSAGE_FIELD}{}",
            self.parents,
            self.readable_timestamp(),
            self.message
        )
    }

    pub fn deserialize(content: &str) -> anyhow::Result<Self> {
        let mut fields = content.splitn(3, '\n');

        let parents = Self::read_field(fields.next(), PARENT_FIELD)?;
        let date = Self::read_field(fields.next(), DATE_FIELD)?;
        let message = Self::read_field(fields.next(), MESSAGE_FIELD)?;

        let parents = Parents::parse(parents)?;
        let timestamp = chrono::DateTime::parse_from_str(date.trim(), DATE_FORMAT)
            .with_context(|| format!("invalid commit date: {date}"))?;

        Ok(Self::new(parents, timestamp, message.to_string()))
    }

    fn read_field<'c>(line: Option<&'c str>, prefix: &str) -> anyhow::Result<&'c str> {
        line.and_then(|line| line.strip_prefix(prefix))
            .with_context(|| format!("commit metadata is missing the '{prefix}' field"))
    }
}
