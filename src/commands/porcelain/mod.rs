//! User-facing repository operations
//!
//! - `add`: stage a file, a directory subtree or everything
//! - `commit`: snapshot staged content into a commit
//! - `credentials`: set the commit author
//! - `log`: commit history
//! - `status`: staged/unstaged partition and directory listing

pub mod add;
pub mod commit;
pub mod credentials;
pub mod log;
pub mod status;
