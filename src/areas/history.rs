//! Commit history
//!
//! Linear, append-only log of commits, oldest first. Commits are never
//! mutated or removed once appended.

use crate::artifacts::objects::commit::Commit;

#[derive(Debug, Default)]
pub struct History {
    commits: Vec<Commit>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, commit: Commit) {
        self.commits.push(commit);
    }

    /// Commits in append order
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Most recent commit
    pub fn head(&self) -> Option<&Commit> {
        self.commits.last()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
