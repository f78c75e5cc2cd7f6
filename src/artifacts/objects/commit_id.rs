//! Commit identifier
//!
//! Identifiers are 40 characters drawn at random from `1234567890abcdef`.
//! They are not content hashes: uniqueness is enforced by the commit store,
//! which regenerates an identifier that is already taken.

use crate::artifacts::objects::{COMMIT_ID_ALPHABET, COMMIT_ID_LENGTH};
use fake::rand;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct CommitId(String);

impl CommitId {
    /// Parse and validate a commit identifier
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid commit ID length: {}", id.len()));
        }
        if !id.bytes().all(|c| COMMIT_ID_ALPHABET.contains(&c)) {
            return Err(anyhow::anyhow!("Invalid commit ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Draw a fresh random identifier
    pub fn generate() -> Self {
        let id = (0..COMMIT_ID_LENGTH)
            .map(|_| {
                let pick = rand::random::<u32>() as usize % COMMIT_ID_ALPHABET.len();
                COMMIT_ID_ALPHABET[pick] as char
            })
            .collect::<String>();

        Self(id)
    }

    /// Draw identifiers until one is not taken
    ///
    /// Collisions are retried silently and without bound.
    pub fn generate_unique(is_taken: impl Fn(&CommitId) -> bool) -> Self {
        loop {
            let candidate = Self::generate();
            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }

    /// First 7 characters, for human-facing output
    pub fn to_short_id(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
