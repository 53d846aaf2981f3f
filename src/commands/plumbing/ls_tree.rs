use crate::areas::repository::Repository;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::tree::Tree;
use crate::commands::plumbing::cat_file::ObjectView;
use crate::errors::RepositoryError;

impl Repository {
    /// Resolve an ID to a tree; a commit ID resolves to its root tree
    pub fn ls_tree(&self, oid: &str) -> Result<&Tree, RepositoryError> {
        let tree_oid = match self.cat_file(oid)? {
            ObjectView::Stored(ObjectBox::Tree(tree)) => return Ok(tree),
            ObjectView::Commit(commit) => commit.tree().clone(),
            ObjectView::Stored(object) => {
                return Err(RepositoryError::NotATree(object.object_id().clone()));
            }
        };

        self.database
            .parse_object_as_tree(&tree_oid)
            .ok_or_else(|| RepositoryError::ObjectNotFound(tree_oid.to_string()))
    }
}
