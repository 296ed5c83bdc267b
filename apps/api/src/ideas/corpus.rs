//! Corpus loader — reads the line-oriented ideas file at startup and builds
//! the immutable identifier → idea mapping every handler reads from.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

/// One line of the corpus, keyed by its content fingerprint.
#[derive(Debug, Clone)]
pub struct Idea {
    pub identifier: String,
    pub raw_text: String,
}

/// The full in-memory corpus. Built once at startup, never mutated while
/// serving. BTreeMap keeps identifier traversal deterministic, which the
/// weighted selector relies on.
#[derive(Debug)]
pub struct Corpus {
    ideas: BTreeMap<String, Idea>,
}

impl Corpus {
    /// Loads the corpus from a line-oriented UTF-8 file. Blank lines are
    /// skipped. Byte-identical lines share a fingerprint; the last occurrence
    /// wins and the collision is logged.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read ideas file at {}", path.display()))?;
        Ok(Self::from_lines(&contents))
    }

    pub fn from_lines(contents: &str) -> Self {
        let mut ideas = BTreeMap::new();
        for line in contents.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let identifier = fingerprint(line);
            let replaced = ideas.insert(
                identifier.clone(),
                Idea {
                    identifier,
                    raw_text: line.to_string(),
                },
            );
            if let Some(prev) = replaced {
                tracing::warn!(
                    identifier = %prev.identifier,
                    "Duplicate corpus line, keeping the later occurrence"
                );
            }
        }
        Corpus { ideas }
    }

    pub fn get(&self, identifier: &str) -> Option<&Idea> {
        self.ideas.get(identifier)
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    /// Ideas in fingerprint order.
    pub fn iter(&self) -> impl Iterator<Item = &Idea> {
        self.ideas.values()
    }
}

/// Deterministic fingerprint of a line's raw bytes: lowercase hex SHA-256.
/// Stable within a process run; a changed line produces a new identifier.
pub fn fingerprint(raw_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fingerprint_stable_across_calls() {
        let a = fingerprint("ship the prototype");
        let b = fingerprint("ship the prototype");
        assert_eq!(a, b, "Same input must give the same identifier");
    }

    #[test]
    fn test_fingerprint_is_lowercase_hex() {
        let id = fingerprint("anything");
        assert!(!id.is_empty());
        assert!(
            id.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "Identifier must match [a-z0-9]+, got {id}"
        );
    }

    #[test]
    fn test_changed_line_changes_identifier() {
        assert_ne!(fingerprint("idea one"), fingerprint("idea two"));
    }

    #[test]
    fn test_from_lines_skips_blanks() {
        let corpus = Corpus::from_lines("first idea\n\n   \nsecond idea\n");
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_duplicate_lines_collapse_to_one_entry() {
        let corpus = Corpus::from_lines("same idea\nsame idea\nother idea\n");
        assert_eq!(corpus.len(), 2, "Duplicates share a fingerprint");
        let idea = corpus.get(&fingerprint("same idea")).unwrap();
        assert_eq!(idea.raw_text, "same idea");
    }

    #[test]
    fn test_lookup_by_identifier() {
        let corpus = Corpus::from_lines("(A) big idea\nplain idea\n");
        let id = fingerprint("(A) big idea");
        assert_eq!(corpus.get(&id).unwrap().raw_text, "(A) big idea");
        assert!(corpus.get("doesnotexist123").is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "X retired idea").unwrap();
        writeln!(file, "(B) medium idea").unwrap();
        let corpus = Corpus::load(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert!(corpus.get(&fingerprint("X retired idea")).is_some());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = Corpus::load(Path::new("/nonexistent/ideas.txt")).unwrap_err();
        assert!(err.to_string().contains("ideas file"));
    }
}
