use crate::areas::repository::Repository;
use crate::artifacts::database::snapshot::Snapshot;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::errors::RepositoryError;
use chrono::{DateTime, FixedOffset};
use log::{debug, info};

impl Repository {
    /// Snapshot the staged content into a new commit stamped with the current time
    pub fn commit(&mut self, message: Option<&str>) -> Result<Commit, RepositoryError> {
        self.commit_at(message, chrono::Local::now().fixed_offset())
    }

    /// Snapshot the staged content into a new commit
    ///
    /// Preconditions are checked and the whole snapshot is built before the
    /// object database or the history is touched, so a failure at any step
    /// leaves both exactly as they were.
    ///
    /// # Errors
    ///
    /// - `NoAuthorSet` if no credentials were entered
    /// - `MissingCommitMessage` if the message is absent or blank
    /// - `NoStagedContent` if nothing is staged
    /// - `StagedFileMissing` if a staged file was deleted from disk
    /// - `Io` if a staged file can no longer be read
    pub fn commit_at(
        &mut self,
        message: Option<&str>,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Commit, RepositoryError> {
        let author = self.author.clone().ok_or(RepositoryError::NoAuthorSet)?;
        let message = message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .ok_or(RepositoryError::MissingCommitMessage)?;

        let snapshot = Snapshot::build(&self.workspace, &self.index)?;
        debug!(
            "snapshot holds {} blobs and {} trees",
            snapshot.blobs().len(),
            snapshot.trees().len()
        );
        let tree = self.database.store_snapshot(snapshot);

        let commit = Commit::new(author, message.to_string(), timestamp, tree);
        info!(
            "created commit {} with root tree {}",
            commit.object_id(),
            commit.tree()
        );
        self.history.append(commit.clone());

        Ok(commit)
    }
}
