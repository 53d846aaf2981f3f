//! Read-only views over the working directory and the index
//!
//! - `status_info`: staged/unstaged partition and the directory listing

pub mod status_info;
