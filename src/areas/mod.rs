//! Core repository components
//!
//! - `database`: object database holding blobs and trees
//! - `history`: append-only commit log
//! - `index`: staging area partitioning known paths into staged/unstaged
//! - `repository`: the repository value tying the areas together
//! - `workspace`: working directory scanner

pub mod database;
pub mod history;
pub mod index;
pub mod repository;
pub mod workspace;
