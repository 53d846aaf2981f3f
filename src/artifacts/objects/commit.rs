//! Commit object
//!
//! A commit records a snapshot: the root tree ID together with the author,
//! message and the wall-clock time of the commit. Commits are immutable and
//! live in the append-only history, not in the object database.
//!
//! ## Hashing
//!
//! `commit_id = H(author ++ message ++ timestamp)` where the timestamp is its
//! RFC 3339 form with nanosecond precision.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::RepositoryError;
use chrono::{DateTime, FixedOffset, SecondsFormat};

/// Identity recorded on commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
}

impl Author {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<&str> for Author {
    type Error = RepositoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let name = value.trim();
        if name.is_empty() {
            return Err(RepositoryError::NoAuthorSet);
        }

        Ok(Author {
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    oid: ObjectId,
    author: Author,
    message: String,
    timestamp: DateTime<FixedOffset>,
    tree: ObjectId,
}

impl Commit {
    pub fn new(
        author: Author,
        message: String,
        timestamp: DateTime<FixedOffset>,
        tree: ObjectId,
    ) -> Self {
        let oid = ObjectId::from_parts([
            author.name().as_bytes(),
            message.as_bytes(),
            Self::hashed_timestamp(&timestamp).as_bytes(),
        ]);

        Commit {
            oid,
            author,
            message,
            timestamp,
            tree,
        }
    }

    fn hashed_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Nanos, false)
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// ID of the root tree
    pub fn tree(&self) -> &ObjectId {
        &self.tree
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn object_id(&self) -> &ObjectId {
        &self.oid
    }

    fn display(&self) -> String {
        format!(
            "tree {}\nauthor {} {}\n\n{}",
            self.tree,
            self.author,
            Self::hashed_timestamp(&self.timestamp),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn timestamp() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-01T12:34:56.000000001+00:00").unwrap()
    }

    #[fixture]
    fn tree() -> ObjectId {
        ObjectId::from_parts(["/"])
    }

    #[rstest]
    fn test_commit_id_covers_author_message_and_timestamp(
        timestamp: DateTime<FixedOffset>,
        tree: ObjectId,
    ) {
        let author = Author::try_from("bob").unwrap();
        let commit = Commit::new(author, "init".to_string(), timestamp, tree);

        let expected = ObjectId::from_parts(["bob", "init", "2024-01-01T12:34:56.000000001+00:00"]);
        assert_eq!(commit.object_id(), &expected);
    }

    #[rstest]
    fn test_commit_id_ignores_the_tree(timestamp: DateTime<FixedOffset>, tree: ObjectId) {
        let author = Author::try_from("bob").unwrap();
        let other_tree = ObjectId::from_parts(["/dir"]);

        let first = Commit::new(author.clone(), "init".to_string(), timestamp, tree);
        let second = Commit::new(author, "init".to_string(), timestamp, other_tree);

        assert_eq!(first.object_id(), second.object_id());
        assert_ne!(first.tree(), second.tree());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_blank_author_is_rejected(#[case] name: &str) {
        assert!(matches!(
            Author::try_from(name),
            Err(RepositoryError::NoAuthorSet)
        ));
    }

    #[rstest]
    fn test_readable_timestamp_and_short_message(
        timestamp: DateTime<FixedOffset>,
        tree: ObjectId,
    ) {
        let author = Author::try_from(" alice ").unwrap();
        let commit = Commit::new(author, "first line\nbody".to_string(), timestamp, tree);

        assert_eq!(commit.author().name(), "alice");
        assert_eq!(commit.short_message(), "first line");
        assert_eq!(commit.readable_timestamp(), "Mon Jan 1 12:34:56 2024 +0000");
    }
}
