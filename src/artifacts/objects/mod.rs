//! Object model
//!
//! Snapshots are stored as immutable, content-addressed objects:
//!
//! - **Blob**: content of one staged file
//! - **Tree**: ordered references to the blobs and trees of one directory
//! - **Commit**: root tree plus author, message and timestamp
//!
//! Blobs and trees live in the object database keyed by their IDs; commits
//! are kept in the repository history.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated object ID
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
