//! Command implementations
//!
//! Every command the dispatcher can invoke lives under `porcelain`, one file
//! per command, as methods on `Repository`.

pub mod porcelain;
