use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;

/// An object found by ID, either in the database or in the history
#[derive(Debug, Clone, Copy)]
pub enum ObjectView<'r> {
    Stored(&'r ObjectBox),
    Commit(&'r Commit),
}

impl Object for ObjectView<'_> {
    fn object_type(&self) -> ObjectType {
        match self {
            ObjectView::Stored(object) => object.object_type(),
            ObjectView::Commit(commit) => commit.object_type(),
        }
    }

    fn object_id(&self) -> &ObjectId {
        match self {
            ObjectView::Stored(object) => object.object_id(),
            ObjectView::Commit(commit) => commit.object_id(),
        }
    }

    fn display(&self) -> String {
        match self {
            ObjectView::Stored(object) => object.display(),
            ObjectView::Commit(commit) => commit.display(),
        }
    }
}

impl Repository {
    /// Look up a blob, tree or commit by full or abbreviated ID
    pub fn cat_file(&self, oid: &str) -> Result<ObjectView<'_>, RepositoryError> {
        let prefix = oid.trim().to_ascii_lowercase();
        if prefix.is_empty() {
            return Err(RepositoryError::ObjectNotFound(oid.to_string()));
        }

        if let Some(full_oid) = ObjectId::try_parse(&prefix) {
            return self
                .database
                .load(&full_oid)
                .map(ObjectView::Stored)
                .or_else(|| {
                    self.history
                        .commits()
                        .iter()
                        .find(|commit| commit.object_id() == &full_oid)
                        .map(ObjectView::Commit)
                })
                .ok_or_else(|| RepositoryError::ObjectNotFound(oid.to_string()));
        }

        let mut candidates = self
            .database
            .find_objects_by_prefix(&prefix)
            .into_iter()
            .filter_map(|oid| self.database.load(&oid).map(ObjectView::Stored))
            .chain(
                self.history
                    .commits()
                    .iter()
                    .filter(|commit| commit.object_id().as_ref().starts_with(&prefix))
                    .map(ObjectView::Commit),
            )
            .collect::<Vec<_>>();

        match candidates.len() {
            0 => Err(RepositoryError::ObjectNotFound(oid.to_string())),
            1 => Ok(candidates.remove(0)),
            count => Err(RepositoryError::AmbiguousObjectId {
                prefix,
                candidates: count,
            }),
        }
    }
}
