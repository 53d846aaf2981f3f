//! Repository error kinds
//!
//! Every operation reports failures through [`RepositoryError`]. None of them is
//! fatal: a failed operation leaves the index, the object database and the
//! commit history exactly as they were.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::workspace::repo_path::RepoPath;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Stage or query target matches no known file or directory
    #[error("pathspec '{0}' did not match any known file or directory")]
    PathNotFound(String),
    /// Partial pathspec resolves to more than one known entry
    #[error("pathspec '{input}' is ambiguous, candidates: {}", join_paths(.candidates))]
    AmbiguousPath {
        input: String,
        candidates: Vec<RepoPath>,
    },
    /// Informational: the target was already staged, nothing changed
    #[error("'{0}' is already staged")]
    AlreadyStaged(RepoPath),
    #[error("no author set, run 'credentials' first")]
    NoAuthorSet,
    #[error("missing commit message, use 'commit -m <message>'")]
    MissingCommitMessage,
    #[error("nothing staged, there is no root tree to commit")]
    NoStagedContent,
    /// A staged file was removed from disk; staging cannot be undone
    #[error("staged file '{0}' no longer exists on disk")]
    StagedFileMissing(RepoPath),
    #[error("object '{0}' not found")]
    ObjectNotFound(String),
    #[error("object prefix '{prefix}' is ambiguous ({candidates} candidates)")]
    AmbiguousObjectId { prefix: String, candidates: usize },
    #[error("object '{0}' is not a tree")]
    NotATree(ObjectId),
    #[error("unable to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RepositoryError {
    /// Whether the error only signals a no-op rather than a failure
    pub fn is_informational(&self) -> bool {
        matches!(self, RepositoryError::AlreadyStaged(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepositoryError::Io {
            path: path.into(),
            source,
        }
    }
}

fn join_paths(paths: &[RepoPath]) -> String {
    paths
        .iter()
        .map(|path| path.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
