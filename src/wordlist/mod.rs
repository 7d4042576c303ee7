// Word lists: embedded language packs and the frozen term sets built from them.
//
// Each detector owns its own WordList. A list is assembled additively from
// language packs (plus an optional operator-supplied file) and frozen by
// `WordListBuilder::build`. Nothing can mutate a WordList afterwards.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;

/// Languages that ship with an embedded pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    /// ISO 639-1 code, as reported by `GET /config`.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

/// Which detector a pack was curated for. The two detectors never share terms
/// at runtime, even where the packs overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    /// Packs for the word-boundary matcher.
    Boundary,
    /// Packs for the tokenizing matcher.
    Token,
}

impl Catalog {
    /// Raw newline-separated pack contents, embedded at compile time.
    pub fn pack(self, language: Language) -> &'static str {
        match (self, language) {
            (Catalog::Boundary, Language::English) => include_str!("packs/boundary_en.txt"),
            (Catalog::Boundary, Language::German) => include_str!("packs/boundary_de.txt"),
            (Catalog::Token, Language::English) => include_str!("packs/token_en.txt"),
            (Catalog::Token, Language::German) => include_str!("packs/token_de.txt"),
        }
    }
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty after loading all sources")]
    Empty,
    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {} contains no terms", path.display())]
    EmptyFile { path: PathBuf },
    #[error("failed to compile word list matcher")]
    Matcher(#[from] aho_corasick::BuildError),
}

/// Accumulates terms from any number of sources. Adding is purely additive.
#[derive(Debug, Clone, Default)]
pub struct WordListBuilder {
    terms: Vec<String>,
}

impl WordListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every term of an embedded language pack.
    pub fn add_pack(self, catalog: Catalog, language: Language) -> Self {
        self.add_terms(parse_terms(catalog.pack(language)))
    }

    /// Add arbitrary terms. Each is trimmed and lower-cased; blanks are skipped.
    pub fn add_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.terms.extend(
            terms
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty()),
        );
        self
    }

    /// Freeze the accumulated terms. Duplicates collapse; order becomes sorted.
    pub fn build(self) -> Result<WordList, WordListError> {
        let unique: BTreeSet<String> = self.terms.into_iter().collect();
        if unique.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(WordList {
            terms: unique.into_iter().collect(),
        })
    }
}

/// An immutable, de-duplicated, sorted set of lower-case terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    terms: Box<[String]>,
}

impl WordList {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Split newline-separated source into trimmed, lower-cased, non-empty terms.
pub fn parse_terms(source: &str) -> impl Iterator<Item = String> + '_ {
    source
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
}

/// Read a newline-separated term file. A file with no terms is an error.
pub fn read_terms_file(path: &Path) -> Result<Vec<String>, WordListError> {
    let source = std::fs::read_to_string(path).map_err(|source| WordListError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let terms: Vec<String> = parse_terms(&source).collect();
    if terms.is_empty() {
        return Err(WordListError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(terms)
}

/// Canonical on-disk form of a word list: trimmed, lower-cased, no blanks,
/// no duplicates, sorted.
pub fn clean_terms(source: &str) -> Vec<String> {
    parse_terms(source)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Rewrite a word-list file in canonical form. Returns the number of terms kept.
pub fn clean_file(path: &Path) -> anyhow::Result<usize> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let terms = clean_terms(&source);
    std::fs::write(path, terms.join("\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(terms.len())
}
