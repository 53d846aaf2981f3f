use crate::areas::database::Database;
use crate::areas::history::History;
use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::Author;
use crate::errors::RepositoryError;
use std::path::Path;

/// A versioned working directory and everything tracked about it
///
/// All state lives in memory for the lifetime of the value. Operations take
/// `&mut self`, so a commit build can never interleave with other mutations.
#[derive(Debug)]
pub struct Repository {
    path: Box<Path>,
    pub(crate) workspace: Workspace,
    pub(crate) index: Index,
    pub(crate) database: Database,
    pub(crate) history: History,
    pub(crate) author: Option<Author>,
}

impl Repository {
    /// Open the working directory at `path` and run the initial scan
    pub fn open(path: &Path) -> Result<Self, RepositoryError> {
        let path = path
            .canonicalize()
            .map_err(|e| RepositoryError::io(path, e))?;

        let mut repository = Repository {
            path: path.clone().into_boxed_path(),
            workspace: Workspace::new(path.into_boxed_path()),
            index: Index::new(),
            database: Database::new(),
            history: History::new(),
            author: None,
        };
        repository.scan()?;

        Ok(repository)
    }

    /// Pick up paths created since the last scan
    ///
    /// # Returns
    ///
    /// The number of newly discovered paths
    pub fn scan(&mut self) -> Result<usize, RepositoryError> {
        let discovered = self.workspace.scan()?;
        let count = discovered.len();
        self.index.track(discovered);

        Ok(count)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }
}
