//! Versioning data structures and algorithms
//!
//! - `branch`: branch names and revision resolution
//! - `core`: copy and removal primitives shared by the areas
//! - `diff`: tree enumeration and comparison
//! - `errors`: typed error kinds
//! - `log`: commit graph traversal
//! - `merge`: merge base selection and staging reconciliation
//! - `objects`: commit ids and commit metadata
//! - `status`: working tree status inspection

pub mod branch;
pub mod core;
pub mod diff;
pub mod errors;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
