//! Commit identity and metadata
//!
//! A commit is a directory snapshot stored under its identifier plus a plain-text
//! sidecar holding its parents, timestamp and message.
//!
//! - **CommitId**: random fixed-length identifier drawn from a hex alphabet
//! - **CommitMetadata**: the `<id>.txt` sidecar (parents, date, message)
//! - **Parents**: zero, one or two parent identifiers

pub mod commit;
pub mod commit_id;

/// Length of a commit identifier
pub const COMMIT_ID_LENGTH: usize = 40;

/// Characters a commit identifier is drawn from
pub const COMMIT_ID_ALPHABET: &[u8] = b"1234567890abcdef";
