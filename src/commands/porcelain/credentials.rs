use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Author;
use crate::errors::RepositoryError;

impl Repository {
    /// Set the author recorded on subsequent commits
    ///
    /// A blank name clears the current author and reports `NoAuthorSet`.
    pub fn set_credentials(&mut self, name: &str) -> Result<&Author, RepositoryError> {
        self.author = None;
        let author = Author::try_from(name)?;

        Ok(self.author.insert(author))
    }
}
