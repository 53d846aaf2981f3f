//! Tree object
//!
//! Trees represent directory snapshots. Children are stored as references
//! (type + object ID) into the object database rather than as owned objects,
//! so the database stays the single owner of every blob and tree.
//!
//! ## Hashing
//!
//! `tree_id = H(directory_path ++ child_id_1 ++ ... ++ child_id_n)`, children in
//! the directory's recorded order. A tree without children hashes to
//! `H(directory_path)`. The ID is re-derived every time a child is added.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::workspace::repo_path::RepoPath;
use derive_new::new;

/// Reference from a tree to one of its children
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    /// Path of the child, kept for listings only
    pub path: RepoPath,
    pub object_type: ObjectType,
    pub oid: ObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    oid: ObjectId,
    path: RepoPath,
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Empty tree for `path`, identified by `H(path)`
    pub fn new(path: RepoPath) -> Self {
        let oid = ObjectId::from_parts([path.as_bytes()]);
        Tree {
            oid,
            path,
            entries: Vec::new(),
        }
    }

    /// Append a child reference and re-derive the tree ID
    pub fn push_entry(&mut self, entry: TreeEntry) {
        self.entries.push(entry);
        self.recalculate_oid();
    }

    fn recalculate_oid(&mut self) {
        let parts = std::iter::once(self.path.as_bytes())
            .chain(self.entries.iter().map(|entry| entry.oid.as_bytes()));
        self.oid = ObjectId::from_parts(parts);
    }

    pub fn path(&self) -> &RepoPath {
        &self.path
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn object_id(&self) -> &ObjectId {
        &self.oid
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{} {}\t{}", entry.object_type, entry.oid, entry.path))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn dir() -> RepoPath {
        RepoPath::parse_user_input("dir")
    }

    fn blob_entry(name: &str) -> TreeEntry {
        let path = RepoPath::parse_user_input(name);
        let oid = ObjectId::from_parts([path.as_bytes()]);
        TreeEntry::new(path, ObjectType::Blob, oid)
    }

    #[rstest]
    fn test_empty_tree_hashes_its_path(dir: RepoPath) {
        let tree = Tree::new(dir);

        assert!(tree.is_empty());
        assert_eq!(tree.object_id(), &ObjectId::from_parts(["/dir"]));
    }

    #[rstest]
    fn test_push_entry_rederives_the_id(dir: RepoPath) {
        let mut tree = Tree::new(dir);
        let before = tree.object_id().clone();
        let child = blob_entry("dir/b.txt");
        let child_oid = child.oid.clone();

        tree.push_entry(child);

        assert_ne!(tree.object_id(), &before);
        assert_eq!(
            tree.object_id(),
            &ObjectId::from_parts([b"/dir".as_slice(), child_oid.as_bytes()])
        );
    }

    #[rstest]
    fn test_child_order_matters(dir: RepoPath) {
        let mut forward = Tree::new(dir.clone());
        forward.push_entry(blob_entry("dir/a"));
        forward.push_entry(blob_entry("dir/b"));

        let mut backward = Tree::new(dir);
        backward.push_entry(blob_entry("dir/b"));
        backward.push_entry(blob_entry("dir/a"));

        assert_ne!(forward.object_id(), backward.object_id());
    }

    proptest! {
        #[test]
        fn prop_tree_hash_is_deterministic(names in prop::collection::vec("[a-z]{1,6}", 0..8)) {
            let build = || {
                let mut tree = Tree::new(RepoPath::parse_user_input("dir"));
                for name in &names {
                    tree.push_entry(blob_entry(&format!("dir/{name}")));
                }
                tree
            };

            let first = build().object_id().clone();
            let second = build().object_id().clone();
            prop_assert_eq!(first, second);
        }
    }
}
