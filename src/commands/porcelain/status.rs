use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::{DirectoryContent, StatusInfo};
use crate::errors::RepositoryError;

impl Repository {
    /// Rescan the working directory and report the staged/unstaged partition
    pub fn status(&mut self) -> Result<StatusInfo, RepositoryError> {
        self.scan()?;

        Ok(self.index.status_info())
    }

    /// Known files, and known directories with their children
    pub fn ls_files(&self) -> DirectoryContent {
        let files = self
            .workspace
            .files()
            .map(|entry| entry.path().clone())
            .collect();
        let directories = self
            .workspace
            .directories()
            .map(|entry| (entry.path().clone(), entry.children().to_vec()))
            .collect();

        DirectoryContent { files, directories }
    }
}
