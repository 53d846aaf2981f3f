//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They identify
//! blobs, trees and commits alike.
//!
//! ## Derivation
//!
//! An ID is the SHA-1 digest of a concatenation of byte sequences:
//!
//! - Blob: `path ++ content`
//! - Tree: `path ++ child_id_1 ++ child_id_2 ++ ...` (hex form of each child)
//! - Commit: `author ++ message ++ timestamp`
//!
//! The formula is fixed; every object kind goes through [`ObjectId::from_parts`].

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use sha1::{Digest, Sha1};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Digest the concatenation of `parts`
    pub fn from_parts<I, P>(parts: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut hasher = Sha1::new();
        for part in parts {
            hasher.update(part.as_ref());
        }

        ObjectId(format!("{:x}", hasher.finalize()))
    }

    /// Parse and validate a full object ID
    pub fn try_parse(id: &str) -> Option<Self> {
        if id.len() == OBJECT_ID_LENGTH && id.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(id.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> &str {
        &self.0[..SHORT_OBJECT_ID_LENGTH]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
