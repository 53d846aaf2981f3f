//! Blob object
//!
//! A blob holds the content of one staged file as it was read at commit time.
//! Its ID covers the file path as well as the content, so two files with equal
//! content at different paths produce different blobs.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::workspace::repo_path::RepoPath;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    oid: ObjectId,
    content: Bytes,
}

impl Blob {
    /// Hash `path ++ content` into a new blob
    pub fn from_file(path: &RepoPath, content: Bytes) -> Self {
        let oid = ObjectId::from_parts([path.as_bytes(), &content[..]]);
        Blob { oid, content }
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn object_id(&self) -> &ObjectId {
        &self.oid
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
