//! Working directory model
//!
//! - `repo_path`: root-anchored path keys shared by every area
//! - `directory_entry`: what the scanner records for each path

pub mod directory_entry;
pub mod repo_path;
