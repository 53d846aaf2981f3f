//! Object database helpers
//!
//! - `snapshot`: builds the blob/tree set of a commit without touching the database

pub mod snapshot;
