use crate::artifacts::workspace::repo_path::RepoPath;
use derive_new::new;
use std::fs::FileType;

/// Classification of a scanned filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices: known, but never staged or committed
    Other,
}

impl From<FileType> for EntryKind {
    fn from(file_type: FileType) -> Self {
        if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
            EntryKind::Other => "other",
        };
        write!(f, "{}", kind)
    }
}

/// A scanned path and, for directories, its immediate children in discovery order
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DirectoryEntry {
    path: RepoPath,
    kind: EntryKind,
    #[new(default)]
    children: Vec<RepoPath>,
}

impl DirectoryEntry {
    pub fn path(&self) -> &RepoPath {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn children(&self) -> &[RepoPath] {
        &self.children
    }

    pub(crate) fn add_child(&mut self, child: RepoPath) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }
}
