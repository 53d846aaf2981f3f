//! Low-level object inspection
//!
//! - `cat-file`: look up any object by full or abbreviated ID
//! - `ls-tree`: list the children of a tree (or of a commit's root tree)

pub mod cat_file;
pub mod ls_tree;
