use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Commit history, oldest first
    pub fn list_commits(&self) -> &[Commit] {
        self.history.commits()
    }
}
