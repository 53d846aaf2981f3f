use crate::areas::repository::Repository;
use crate::artifacts::workspace::directory_entry::EntryKind;
use crate::artifacts::workspace::repo_path::RepoPath;
use crate::errors::RepositoryError;

/// Outcome of a successful `add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// The resolved path that was staged
    pub target: RepoPath,
    /// How many paths moved from unstaged to staged, ancestors included
    pub newly_staged: usize,
}

impl Repository {
    /// Stage a file or directory named by a pathspec, `.` meaning everything
    ///
    /// The working directory is rescanned first so that files created since
    /// the last scan can be staged right away.
    ///
    /// # Errors
    ///
    /// - `PathNotFound` / `AmbiguousPath` if the pathspec does not resolve
    /// - `AlreadyStaged` if nothing changed
    ///
    /// The index is unchanged on every error.
    pub fn add(&mut self, pathspec: &str) -> Result<StageReport, RepositoryError> {
        if RepoPath::parse_user_input(pathspec).is_root() {
            return self.add_all();
        }

        self.scan()?;

        let target = self.workspace.resolve(pathspec)?;
        let kind = self
            .workspace
            .entry(&target)
            .map(|entry| entry.kind())
            .ok_or_else(|| RepositoryError::PathNotFound(pathspec.to_string()))?;

        let newly_staged = match kind {
            EntryKind::File => {
                self.index.stage_path(&target)?;
                1 + self.index.stage_ancestors(&target)
            }
            EntryKind::Directory => {
                let newly_staged = self.index.stage_directory(&target, &self.workspace)?;
                if newly_staged == 0 {
                    return Err(RepositoryError::AlreadyStaged(target));
                }
                newly_staged
            }
            EntryKind::Other => return Err(RepositoryError::PathNotFound(pathspec.to_string())),
        };

        Ok(StageReport {
            target,
            newly_staged,
        })
    }

    /// Stage the whole working directory
    ///
    /// # Errors
    ///
    /// - `AlreadyStaged` if every known file and directory was already staged
    pub fn add_all(&mut self) -> Result<StageReport, RepositoryError> {
        self.scan()?;

        let target = RepoPath::root();
        let newly_staged = self.index.stage_all(&self.workspace)?;
        if newly_staged == 0 {
            return Err(RepositoryError::AlreadyStaged(target));
        }

        Ok(StageReport {
            target,
            newly_staged,
        })
    }
}
