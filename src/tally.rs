// src/tally.rs
use std::collections::HashMap;

use crate::blame::BlameError;

/// Lookup failed because the file is gone from the working tree.
pub const UNKNOWN_FILE_NOT_FOUND: &str = "unknown_file_not_found";
/// Lookup failed because git blame errored or its output was unreadable.
pub const UNKNOWN_BLAME_ERROR: &str = "unknown_blame_error";
/// Blame ran cleanly but its output carried no author field.
pub const UNKNOWN_AUTHOR_NOT_FOUND: &str = "unknown_author_not_found_in_blame";
/// Blame reported an author whose name trims to nothing.
pub const UNKNOWN_AUTHOR_EMPTY: &str = "unknown_author_empty";

/// Running map from author identity to attributed error count.
///
/// Every matched diagnostic lands in exactly one bucket — real authors or
/// one of the `unknown_*` sentinels — so the total always equals the number
/// of matched lines. Identities are not normalized: `Alice <a@x>` and
/// `alice <a@x>` count separately.
#[derive(Debug, Default)]
pub struct AuthorTally {
    counts: HashMap<String, u64>,
}

impl AuthorTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `author`, inserting at zero if unseen.
    pub fn record(&mut self, author: &str) {
        *self.counts.entry(author.to_string()).or_default() += 1;
    }

    /// Collapses a resolver outcome to a concrete identity and records it.
    ///
    /// Returns the identity that was recorded.
    pub fn attribute(&mut self, outcome: Result<Option<String>, BlameError>) -> String {
        let identity = match outcome {
            Ok(Some(author)) => {
                let trimmed = author.trim();
                if trimmed.is_empty() {
                    UNKNOWN_AUTHOR_EMPTY.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            Ok(None) => UNKNOWN_AUTHOR_NOT_FOUND.to_string(),
            Err(BlameError::FileNotFound(_)) => UNKNOWN_FILE_NOT_FOUND.to_string(),
            Err(BlameError::Execution { .. } | BlameError::Scan(..)) => {
                UNKNOWN_BLAME_ERROR.to_string()
            }
        };
        self.record(&identity);
        identity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct identities seen.
    #[must_use]
    pub fn authors(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(a, &c)| (a.as_str(), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn record_counts_repeat_authors() {
        let mut tally = AuthorTally::new();
        tally.record("Alice");
        tally.record("Alice");
        tally.record("Bob");
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.authors(), 2);
    }

    #[test]
    fn attribute_keeps_real_authors_trimmed() {
        let mut tally = AuthorTally::new();
        let id = tally.attribute(Ok(Some("  Alice Example ".to_string())));
        assert_eq!(id, "Alice Example");
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn attribute_maps_each_failure_to_its_bucket() {
        let mut tally = AuthorTally::new();
        assert_eq!(
            tally.attribute(Err(BlameError::FileNotFound(PathBuf::from("x.ts")))),
            UNKNOWN_FILE_NOT_FOUND
        );
        assert_eq!(
            tally.attribute(Err(BlameError::Execution {
                path: "x.ts".into(),
                line: "1".into(),
                stderr: "fatal: not a git repository".into(),
            })),
            UNKNOWN_BLAME_ERROR
        );
        assert_eq!(tally.attribute(Ok(None)), UNKNOWN_AUTHOR_NOT_FOUND);
        assert_eq!(tally.attribute(Ok(Some("   ".to_string()))), UNKNOWN_AUTHOR_EMPTY);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.authors(), 4);
    }

    #[test]
    fn identities_are_not_case_folded() {
        let mut tally = AuthorTally::new();
        tally.record("Alice");
        tally.record("alice");
        assert_eq!(tally.authors(), 2);
    }
}
