//! Object database
//!
//! In-memory, content-addressed store of blobs and trees keyed by object ID.
//! Storing an object whose ID is already present is a no-op: equal IDs are
//! treated as equal objects.

use crate::artifacts::database::snapshot::Snapshot;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use log::debug;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Database {
    objects: BTreeMap<ObjectId, ObjectBox>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, object: impl Into<ObjectBox>) {
        let object = object.into();
        if self.contains(object.object_id()) {
            debug!("{} {} already stored", object.object_type(), object.object_id());
            return;
        }

        self.objects.insert(object.object_id().clone(), object);
    }

    /// Publish every object of a finished snapshot
    ///
    /// # Returns
    ///
    /// The ID of the snapshot's root tree
    pub fn store_snapshot(&mut self, snapshot: Snapshot) -> ObjectId {
        let (blobs, trees, root) = snapshot.into_parts();

        blobs.into_iter().for_each(|blob| self.store(blob));
        trees.into_iter().for_each(|tree| self.store(tree));

        root
    }

    pub fn load(&self, object_id: &ObjectId) -> Option<&ObjectBox> {
        self.objects.get(object_id)
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Option<&Blob> {
        match self.load(object_id) {
            Some(ObjectBox::Blob(blob)) => Some(blob),
            _ => None,
        }
    }

    pub fn parse_object_as_tree(&self, object_id: &ObjectId) -> Option<&Tree> {
        match self.load(object_id) {
            Some(ObjectBox::Tree(tree)) => Some(tree),
            _ => None,
        }
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.objects.contains_key(object_id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find all objects whose ID starts with the given prefix.
    ///
    /// Used to resolve abbreviated IDs. More than one match means the prefix
    /// is ambiguous.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> Vec<ObjectId> {
        let prefix = prefix.to_ascii_lowercase();

        self.objects
            .keys()
            .filter(|oid| oid.as_ref().starts_with(&prefix))
            .cloned()
            .collect()
    }
}
