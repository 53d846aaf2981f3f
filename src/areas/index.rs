//! Staging index
//!
//! The index partitions every known path into two disjoint sets: `staged`
//! (eligible for the next commit) and `unstaged`. Newly discovered paths start
//! unstaged. The only transition is unstaged → staged; nothing is ever
//! unstaged again.
//!
//! ## Ancestor propagation
//!
//! A directory must be staged for anything below it to reach the commit tree,
//! so every staging operation also stages the chain of directories up to `/`.

use crate::areas::workspace::Workspace;
use crate::artifacts::status::status_info::StatusInfo;
use crate::artifacts::workspace::repo_path::RepoPath;
use crate::errors::RepositoryError;
use log::debug;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct Index {
    staged: BTreeSet<RepoPath>,
    unstaged: BTreeSet<RepoPath>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register newly discovered paths as unstaged
    ///
    /// Paths already known to the index keep their current state.
    pub fn track(&mut self, paths: impl IntoIterator<Item = RepoPath>) {
        for path in paths {
            if !self.staged.contains(&path) {
                self.unstaged.insert(path);
            }
        }
    }

    pub fn is_staged(&self, path: &RepoPath) -> bool {
        self.staged.contains(path)
    }

    pub fn staged(&self) -> &BTreeSet<RepoPath> {
        &self.staged
    }

    pub fn unstaged(&self) -> &BTreeSet<RepoPath> {
        &self.unstaged
    }

    pub fn status_info(&self) -> StatusInfo {
        StatusInfo {
            staged: self.staged.iter().cloned().collect(),
            unstaged: self.unstaged.iter().cloned().collect(),
        }
    }

    /// Move `path` from unstaged to staged
    ///
    /// # Errors
    ///
    /// - `AlreadyStaged` if the path is staged already (no change)
    /// - `PathNotFound` if the index does not know the path
    pub fn stage_path(&mut self, path: &RepoPath) -> Result<(), RepositoryError> {
        if self.staged.contains(path) {
            return Err(RepositoryError::AlreadyStaged(path.clone()));
        }

        if self.mark_staged(path) {
            Ok(())
        } else {
            Err(RepositoryError::PathNotFound(path.to_string()))
        }
    }

    /// Stage every ancestor directory of `path`, ending with `/`
    ///
    /// # Returns
    ///
    /// The number of ancestors that were newly staged
    pub fn stage_ancestors(&mut self, path: &RepoPath) -> usize {
        path.ancestors()
            .iter()
            .filter(|ancestor| self.mark_staged(ancestor))
            .count()
    }

    /// Stage a directory, its whole subtree and its ancestors
    ///
    /// The subtree is walked depth-first in pre-order with an explicit stack;
    /// siblings are visited in their recorded order.
    ///
    /// # Returns
    ///
    /// The number of newly staged paths
    pub fn stage_directory(
        &mut self,
        path: &RepoPath,
        workspace: &Workspace,
    ) -> Result<usize, RepositoryError> {
        let directory = workspace
            .entry(path)
            .filter(|entry| entry.is_dir())
            .ok_or_else(|| RepositoryError::PathNotFound(path.to_string()))?;

        let mut newly_staged = usize::from(self.mark_staged(path));

        let mut stack = directory.children().iter().rev().collect::<Vec<_>>();
        while let Some(child) = stack.pop() {
            newly_staged += usize::from(self.mark_staged(child));

            if let Some(entry) = workspace.entry(child)
                && entry.is_dir()
            {
                stack.extend(entry.children().iter().rev());
            }
        }

        newly_staged += self.stage_ancestors(path);

        Ok(newly_staged)
    }

    /// Stage the whole working directory, `/` included
    pub fn stage_all(&mut self, workspace: &Workspace) -> Result<usize, RepositoryError> {
        self.stage_directory(&RepoPath::root(), workspace)
    }

    fn mark_staged(&mut self, path: &RepoPath) -> bool {
        if self.unstaged.remove(path) {
            debug!("staged {path}");
            self.staged.insert(path.clone());
            true
        } else {
            false
        }
    }
}
