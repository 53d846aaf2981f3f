//! Data structures and algorithms
//!
//! - `database`: snapshot building for commits
//! - `objects`: object types (blob, tree, commit) and their IDs
//! - `status`: status and directory listing views
//! - `workspace`: repository paths and scanned directory entries

pub mod database;
pub mod objects;
pub mod status;
pub mod workspace;
