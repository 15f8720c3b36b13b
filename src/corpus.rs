/// Corpus loading and normalization — the input side of the generator.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Normalize a raw place name.
///
/// Drops everything from the first comma (trailing state/region qualifiers
/// like "Springfield, Illinois"), lowercases, keeps only ASCII letters and
/// spaces, and collapses whitespace runs so entries contain single spaces
/// only.
pub fn normalize_name(raw: &str) -> String {
    let head = raw.split(',').next().unwrap_or("");
    let filtered: String = head
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The normalized source-name list plus a membership index for
/// case-insensitive collision checks. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    names: Vec<String>,
    index: FxHashSet<String>,
}

// JSON shape of the SPARQL query results the corpus data ships as:
// `results.bindings[].name.value`. Unknown fields are ignored.

#[derive(Debug, Deserialize)]
struct JsonResults {
    results: JsonBindings,
}

#[derive(Debug, Deserialize)]
struct JsonBindings {
    bindings: Vec<JsonRow>,
}

#[derive(Debug, Deserialize)]
struct JsonRow {
    name: JsonCell,
}

#[derive(Debug, Deserialize)]
struct JsonCell {
    value: String,
}

impl Corpus {
    /// Build a corpus from raw name strings. Entries that normalize to
    /// empty are dropped; duplicates are kept (they carry frequency
    /// information for start-syllable sampling).
    pub fn from_raw<I, S>(raw: I) -> Corpus
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Corpus::default();
        for entry in raw {
            let name = normalize_name(entry.as_ref());
            if name.is_empty() {
                continue;
            }
            corpus.index.insert(name.clone());
            corpus.names.push(name);
        }
        corpus
    }

    /// Load a corpus from a plain text file, one name per line.
    pub fn load_lines(path: &Path) -> Result<Corpus, CorpusError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Corpus::from_raw(contents.lines()))
    }

    /// Load a corpus from a SPARQL-results JSON file.
    pub fn load_json(path: &Path) -> Result<Corpus, CorpusError> {
        let contents = std::fs::read_to_string(path)?;
        let parsed: JsonResults = serde_json::from_str(&contents)?;
        Ok(Corpus::from_raw(
            parsed.results.bindings.iter().map(|row| row.name.value.as_str()),
        ))
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(&name.to_lowercase())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
