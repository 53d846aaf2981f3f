//! Repository-relative paths
//!
//! Every entry discovered in the working directory is keyed by a [`RepoPath`]:
//! a `/`-separated string anchored at the repository root, which is itself
//! spelled `/`. For example `dir/b.txt` under the root becomes `/dir/b.txt`.

use std::path::{Component, Path, PathBuf};

/// Spelling of the repository root
pub const ROOT: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoPath(String);

impl RepoPath {
    pub fn root() -> Self {
        RepoPath(ROOT.to_string())
    }

    /// Build a path from one relative to the working directory root.
    ///
    /// An empty relative path maps to the root.
    pub fn from_relative(path: &Path) -> Self {
        let components = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>();

        Self::from_segments(components)
    }

    /// Normalize a pathspec typed by the user
    ///
    /// Accepts `a.txt`, `/a.txt`, `./dir/`, `dir//b.txt` and `.` (the root).
    pub fn parse_user_input(input: &str) -> Self {
        let segments = input
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .map(str::to_string)
            .collect::<Vec<_>>();

        Self::from_segments(segments)
    }

    fn from_segments(segments: Vec<String>) -> Self {
        if segments.is_empty() {
            Self::root()
        } else {
            RepoPath(format!("/{}", segments.join("/")))
        }
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    /// Parent directory, `None` for the root
    pub fn parent(&self) -> Option<RepoPath> {
        if self.is_root() {
            return None;
        }

        match self.0.rfind('/') {
            Some(0) | None => Some(Self::root()),
            Some(idx) => Some(RepoPath(self.0[..idx].to_string())),
        }
    }

    /// All ancestors, nearest first, ending with the root
    pub fn ancestors(&self) -> Vec<RepoPath> {
        std::iter::successors(self.parent(), RepoPath::parent).collect()
    }

    /// Number of components below the root
    pub fn depth(&self) -> usize {
        if self.is_root() {
            0
        } else {
            self.0.matches('/').count()
        }
    }

    /// Last component, or `/` for the root
    pub fn basename(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) if !self.is_root() => &self.0[idx + 1..],
            _ => ROOT,
        }
    }

    /// Whether `suffix` names the trailing components of this path.
    ///
    /// Matching is component-aligned: `/notes.txt` matches `/x/notes.txt`
    /// but not `/xnotes.txt`. The root never acts as a suffix.
    pub fn ends_with(&self, suffix: &RepoPath) -> bool {
        !suffix.is_root() && self.0.ends_with(&suffix.0)
    }

    /// Path relative to the working directory root, for filesystem access
    pub fn to_relative_path(&self) -> PathBuf {
        PathBuf::from(self.0.trim_start_matches('/'))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "/")]
    #[case("a.txt", "/a.txt")]
    #[case("dir/b.txt", "/dir/b.txt")]
    #[case("dir/nested/c.txt", "/dir/nested/c.txt")]
    fn test_from_relative(#[case] relative: &str, #[case] expected: &str) {
        let path = RepoPath::from_relative(Path::new(relative));
        assert_eq!(path.as_ref(), expected);
    }

    #[rstest]
    #[case(".", "/")]
    #[case("/", "/")]
    #[case("a.txt", "/a.txt")]
    #[case("./dir/", "/dir")]
    #[case("/dir//b.txt", "/dir/b.txt")]
    #[case("  dir/b.txt  ", "/dir/b.txt")]
    fn test_parse_user_input(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(RepoPath::parse_user_input(input).as_ref(), expected);
    }

    #[rstest]
    #[case("/", None)]
    #[case("/a.txt", Some("/"))]
    #[case("/dir/b.txt", Some("/dir"))]
    fn test_parent(#[case] path: &str, #[case] expected: Option<&str>) {
        let parent = RepoPath::parse_user_input(path).parent();
        assert_eq!(parent.map(|p| p.to_string()), expected.map(str::to_string));
    }

    #[test]
    fn test_ancestors_end_at_root() {
        let path = RepoPath::parse_user_input("/a/b/c.txt");
        let ancestors = path
            .ancestors()
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>();

        assert_eq!(ancestors, vec!["/a/b", "/a", "/"]);
    }

    #[test]
    fn test_suffix_matching_is_component_aligned() {
        let path = RepoPath::parse_user_input("/x/notes.txt");

        assert!(path.ends_with(&RepoPath::parse_user_input("notes.txt")));
        assert!(path.ends_with(&RepoPath::parse_user_input("x/notes.txt")));
        assert!(!path.ends_with(&RepoPath::parse_user_input("otes.txt")));
        assert!(!path.ends_with(&RepoPath::root()));
    }

    #[test]
    fn test_basename_and_depth() {
        let path = RepoPath::parse_user_input("/dir/b.txt");
        assert_eq!(path.basename(), "b.txt");
        assert_eq!(path.depth(), 2);
        assert_eq!(RepoPath::root().basename(), "/");
        assert_eq!(RepoPath::root().depth(), 0);
    }

    proptest! {
        #[test]
        fn prop_ancestor_chain_has_one_entry_per_level(segments in prop::collection::vec("[a-z]{1,4}", 1..6)) {
            let path = RepoPath::parse_user_input(&segments.join("/"));
            let ancestors = path.ancestors();

            prop_assert_eq!(ancestors.len(), path.depth());
            prop_assert_eq!(ancestors.last(), Some(&RepoPath::root()));
        }
    }
}
