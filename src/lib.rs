//! simplegit - a minimal versioning tool
//!
//! Snapshots a working directory into an in-memory, content-addressed object
//! graph (blob/tree/commit). A staging index decides which scanned paths take
//! part in the next snapshot.
//!
//! - `areas`: the repository and the state it owns (workspace, index, database, history)
//! - `artifacts`: value types (paths, directory entries, objects, snapshots, status)
//! - `commands`: repository operations (add, commit, status, log, plumbing)
//! - `shell`: the interactive command loop
//! - `errors`: recoverable error kinds reported by every operation

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod shell;
