//! Repository operations
//!
//! Operations are implemented as methods on [`Repository`](crate::areas::repository::Repository)
//! and return typed results; presenting them is left to the caller.
//!
//! - `plumbing`: object inspection (cat-file, ls-tree)
//! - `porcelain`: user workflows (credentials, add, status, commit, log)

pub mod plumbing;
pub mod porcelain;
