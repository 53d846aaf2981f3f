//! Working directory scanner
//!
//! The workspace remembers every path it has ever seen. Scans walk the
//! directory top-down and only register paths that are new, so repeated scans
//! never reclassify or duplicate an entry and never forget one.

use crate::artifacts::workspace::directory_entry::{DirectoryEntry, EntryKind};
use crate::artifacts::workspace::repo_path::RepoPath;
use crate::errors::RepositoryError;
use bytes::Bytes;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

const IGNORED_PATHS: [&str; 1] = [".git"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
    entries: BTreeMap<RepoPath, DirectoryEntry>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace {
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk the working directory and register new paths
    ///
    /// Entries within a directory are visited in file name order, which fixes
    /// the child order recorded for each directory. Unreadable entries are
    /// skipped.
    ///
    /// # Returns
    ///
    /// The newly discovered paths, parents before children
    pub fn scan(&mut self) -> Result<Vec<RepoPath>, RepositoryError> {
        std::fs::metadata(&self.path).map_err(|e| RepositoryError::io(self.path.to_path_buf(), e))?;

        let root = self.path.clone();
        let walker = WalkDir::new(&self.path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                !Self::is_ignored(entry.path().strip_prefix(&root).unwrap_or(entry.path()))
            });

        let mut discovered = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            let Ok(relative_path) = entry.path().strip_prefix(&self.path) else {
                continue;
            };
            let path = RepoPath::from_relative(relative_path);

            if self.entries.contains_key(&path) {
                continue;
            }

            let kind = if relative_path.to_str().is_none() {
                warn!("{path} is not valid UTF-8 on disk, it will never be staged");
                EntryKind::Other
            } else {
                EntryKind::from(entry.file_type())
            };
            self.register(path.clone(), kind);
            debug!("discovered {kind} {path}");

            discovered.push(path);
        }

        Ok(discovered)
    }

    fn register(&mut self, path: RepoPath, kind: EntryKind) {
        if kind != EntryKind::Other
            && let Some(parent) = path.parent()
            && let Some(parent_entry) = self.entries.get_mut(&parent)
        {
            parent_entry.add_child(path.clone());
        }

        self.entries
            .insert(path.clone(), DirectoryEntry::new(path, kind));
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    pub fn entry(&self, path: &RepoPath) -> Option<&DirectoryEntry> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.values()
    }

    pub fn files(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.values().filter(|entry| entry.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries.values().filter(|entry| entry.is_dir())
    }

    /// Resolve a user pathspec to a known file or directory
    ///
    /// An exact match wins. A pathspec starting with `/` is anchored at the
    /// root and only matches exactly. Otherwise the pathspec is matched
    /// against the trailing components of every known file and directory, so
    /// `b.txt` finds `/dir/b.txt`. More than one candidate is an error.
    pub fn resolve(&self, pathspec: &str) -> Result<RepoPath, RepositoryError> {
        let wanted = RepoPath::parse_user_input(pathspec);

        if let Some(entry) = self.entries.get(&wanted) {
            return match entry.kind() {
                EntryKind::File | EntryKind::Directory => Ok(wanted),
                EntryKind::Other => Err(RepositoryError::PathNotFound(pathspec.to_string())),
            };
        }

        if pathspec.trim_start().starts_with('/') {
            return Err(RepositoryError::PathNotFound(pathspec.to_string()));
        }

        let mut candidates = self
            .entries
            .values()
            .filter(|entry| entry.kind() != EntryKind::Other && entry.path().ends_with(&wanted))
            .map(|entry| entry.path().clone())
            .collect::<Vec<_>>();

        match candidates.len() {
            0 => Err(RepositoryError::PathNotFound(pathspec.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => Err(RepositoryError::AmbiguousPath {
                input: pathspec.to_string(),
                candidates,
            }),
        }
    }

    pub fn read_file(&self, path: &RepoPath) -> Result<Bytes, RepositoryError> {
        let file_path = self.path.join(path.to_relative_path());

        std::fs::read(&file_path)
            .map(Bytes::from)
            .map_err(|e| RepositoryError::io(file_path, e))
    }
}
