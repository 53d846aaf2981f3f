//! Snapshot building
//!
//! A [`Snapshot`] is the full set of blobs and trees a commit would publish,
//! computed off to the side from the workspace and the index. Nothing is
//! written to the object database while building, so a failed build leaves
//! the repository untouched.
//!
//! ## Algorithm
//!
//! 1. Every staged file is read and hashed into a blob.
//! 2. Every directory gets a tree, deepest directories first. Since all
//!    subtrees are final before their parent is assembled, a parent never
//!    consumes a stale child ID.
//! 3. A directory's tree references, in recorded child order, the blobs of its
//!    staged files and the trees of its staged, non-empty subdirectories.
//! 4. The tree at `/` is the root of the snapshot.

use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use crate::artifacts::workspace::repo_path::RepoPath;
use crate::errors::RepositoryError;
use std::cmp::Reverse;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Snapshot {
    blobs: Vec<Blob>,
    trees: Vec<Tree>,
    root: ObjectId,
}

impl Snapshot {
    pub fn build(workspace: &Workspace, index: &Index) -> Result<Self, RepositoryError> {
        let root_path = RepoPath::root();
        if !index.is_staged(&root_path) {
            return Err(RepositoryError::NoStagedContent);
        }

        let mut blobs = BTreeMap::<RepoPath, Blob>::new();
        for file in workspace.files().filter(|file| index.is_staged(file.path())) {
            let content = workspace.read_file(file.path()).map_err(|err| match err {
                RepositoryError::Io { ref source, .. }
                    if source.kind() == std::io::ErrorKind::NotFound =>
                {
                    RepositoryError::StagedFileMissing(file.path().clone())
                }
                other => other,
            })?;
            blobs.insert(file.path().clone(), Blob::from_file(file.path(), content));
        }

        let mut directories = workspace.directories().collect::<Vec<_>>();
        directories.sort_by_key(|directory| Reverse(directory.path().depth()));

        let mut trees = BTreeMap::<RepoPath, Tree>::new();
        for directory in directories {
            let mut tree = Tree::new(directory.path().clone());

            for child in directory.children() {
                if let Some(blob) = blobs.get(child) {
                    tree.push_entry(TreeEntry::new(
                        child.clone(),
                        ObjectType::Blob,
                        blob.object_id().clone(),
                    ));
                } else if index.is_staged(child)
                    && let Some(subtree) = trees.get(child)
                    && !subtree.is_empty()
                {
                    tree.push_entry(TreeEntry::new(
                        child.clone(),
                        ObjectType::Tree,
                        subtree.object_id().clone(),
                    ));
                }
            }

            trees.insert(directory.path().clone(), tree);
        }

        let root = trees
            .get(&root_path)
            .map(|tree| tree.object_id().clone())
            .ok_or(RepositoryError::NoStagedContent)?;

        // only trees reachable from the root are published
        let trees = trees
            .into_iter()
            .filter(|(path, tree)| {
                path.is_root() || (index.is_staged(path) && !tree.is_empty())
            })
            .map(|(_, tree)| tree)
            .collect();

        Ok(Snapshot {
            blobs: blobs.into_values().collect(),
            trees,
            root,
        })
    }

    pub fn root(&self) -> &ObjectId {
        &self.root
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn into_parts(self) -> (Vec<Blob>, Vec<Tree>, ObjectId) {
        (self.blobs, self.trees, self.root)
    }
}
