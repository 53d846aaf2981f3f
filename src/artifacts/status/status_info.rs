use crate::artifacts::workspace::repo_path::RepoPath;
use std::collections::BTreeMap;

/// Staged/unstaged partition of every known path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub staged: Vec<RepoPath>,
    pub unstaged: Vec<RepoPath>,
}

impl StatusInfo {
    pub fn is_clean(&self) -> bool {
        self.unstaged.is_empty()
    }
}

/// Known files and directories, the latter with their immediate children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryContent {
    pub files: Vec<RepoPath>,
    pub directories: BTreeMap<RepoPath, Vec<RepoPath>>,
}
