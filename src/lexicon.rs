//! Synonym table loading and word-to-root lookup.
//!
//! A synonym source is plain text with one group per line: the first
//! whitespace-separated word is the canonical root, every later word is a
//! synonym that normalizes to it. The root itself is never inserted as a key
//! by its own group, so looking it up returns `None` and signals that the
//! word is already canonical.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::LexiconError;

/// Mapping from synonym word to its canonical root.
///
/// Built once at startup and immutable afterward; lookups take `&self`, so a
/// lexicon can be shared freely across concurrent tuple generation.
///
/// A word listed under two different groups resolves to the LAST group's
/// root (plain overwrite-on-insert). That precedence is deliberate and
/// pinned by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymLexicon {
    roots: HashMap<String, String>,
}

impl SynonymLexicon {
    /// Parse a synonym table from text.
    ///
    /// Blank lines and single-word groups contribute no mappings.
    pub fn parse(text: &str) -> Self {
        let mut roots = HashMap::new();
        for line in text.lines() {
            let mut group = line.split_whitespace();
            let Some(root) = group.next() else {
                continue;
            };
            for synonym in group {
                roots.insert(synonym.to_string(), root.to_string());
            }
        }
        Self { roots }
    }

    /// Read and parse a synonym table from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// True iff `word` is mapped to a root.
    pub fn is_synonym(&self, word: &str) -> bool {
        self.roots.contains_key(word)
    }

    /// The canonical root of `word`, or `None` when the word is not in the
    /// table. Never silently returns the input word; callers apply the
    /// identity themselves for unmapped words.
    pub fn canonical_root(&self, word: &str) -> Option<&str> {
        self.roots.get(word).map(String::as_str)
    }

    /// Number of synonym mappings in the table.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
