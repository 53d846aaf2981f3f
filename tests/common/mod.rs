#![allow(dead_code)]

pub mod command;
pub mod file;

use sha1::{Digest, Sha1};

/// Hex SHA-1 of the concatenated parts, computed independently of the crate
pub fn sha1_hex(parts: &[&str]) -> String {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }

    format!("{:x}", hasher.finalize())
}
