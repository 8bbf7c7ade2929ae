//! Lexicon entry data model.
//!
//! Entries are either root words (atomic, no internal decomposition) or
//! compound words (hyphen-joined sequences of existing roots). The kind is a
//! tagged variant: a compound always carries its root list, a root never does.
//! Invalid combinations are rejected at construction, not discovered later.

use anyhow::{bail, Result};
use serde::Deserialize;
use std::collections::BTreeSet;

/// Word kind: an atomic root, or a compound carrying its ordered root list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordKind {
    Root,
    Compound { roots: Vec<String> },
}

impl WordKind {
    /// Display label matching the snapshot format (`Root` / `Compound`).
    pub fn label(&self) -> &'static str {
        match self {
            WordKind::Root => "Root",
            WordKind::Compound { .. } => "Compound",
        }
    }
}

/// A single validated lexicon entry.
#[derive(Debug, Clone)]
pub struct LexiconEntry {
    /// The word itself; unique key within the lexicon, never empty.
    pub word: String,
    /// Phonemic transcription, when the snapshot provides one.
    pub pronunciation: Option<String>,
    pub definition: String,
    /// Semantic domain (e.g. `Emotion`, `Nature`).
    pub domain: String,
    pub part_of_speech: String,
    pub kind: WordKind,
    /// Compounds that cite this entry as a root. Computed by the store while
    /// indexing, never authored in the snapshot.
    pub derived_words: BTreeSet<String>,
    /// Free-text note explaining a compound's derivation.
    pub etymology_note: Option<String>,
}

impl LexiconEntry {
    /// Create a root entry.
    pub fn root(word: &str, definition: &str, domain: &str, part_of_speech: &str) -> Result<Self> {
        if word.is_empty() {
            bail!("lexicon entry must have a non-empty word");
        }
        Ok(Self {
            word: word.to_string(),
            pronunciation: None,
            definition: definition.to_string(),
            domain: domain.to_string(),
            part_of_speech: part_of_speech.to_string(),
            kind: WordKind::Root,
            derived_words: BTreeSet::new(),
            etymology_note: None,
        })
    }

    /// Create a compound entry. Rejects an empty root list.
    pub fn compound(
        word: &str,
        definition: &str,
        domain: &str,
        part_of_speech: &str,
        roots: Vec<String>,
    ) -> Result<Self> {
        if word.is_empty() {
            bail!("lexicon entry must have a non-empty word");
        }
        if roots.is_empty() {
            bail!("compound word '{}' must have roots defined", word);
        }
        Ok(Self {
            word: word.to_string(),
            pronunciation: None,
            definition: definition.to_string(),
            domain: domain.to_string(),
            part_of_speech: part_of_speech.to_string(),
            kind: WordKind::Compound { roots },
            derived_words: BTreeSet::new(),
            etymology_note: None,
        })
    }

    /// The root list for a compound, or `None` for a root word.
    pub fn roots(&self) -> Option<&[String]> {
        match &self.kind {
            WordKind::Root => None,
            WordKind::Compound { roots } => Some(roots),
        }
    }
}

/// Snapshot-facing entry shape. Deliberately loose: the loader decides per
/// entry whether to promote it to a [`LexiconEntry`] or skip it with a
/// warning.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub word_type: Option<String>,
    #[serde(default)]
    pub roots: Option<Vec<String>>,
    #[serde(default)]
    pub etymology_note: Option<String>,
}

impl RawEntry {
    /// Validate and promote a raw snapshot entry.
    ///
    /// The kind comes from the explicit `word_type` field when present;
    /// otherwise it is inferred from the hyphen-compounding convention.
    pub fn into_entry(self) -> Result<LexiconEntry> {
        let word = match self.word {
            Some(w) if !w.is_empty() => w,
            _ => bail!("entry has no word field"),
        };

        let roots = self.roots.filter(|r| !r.is_empty());
        let kind = match self.word_type.as_deref() {
            Some("Compound") => match roots {
                Some(roots) => WordKind::Compound { roots },
                None => bail!("compound word '{}' must have roots defined", word),
            },
            Some("Root") => {
                if roots.is_some() {
                    bail!("root word '{}' should not have roots defined", word);
                }
                WordKind::Root
            }
            Some(other) => bail!("unknown word_type '{}' for '{}'", other, word),
            None => match roots.or_else(|| detect_compound_roots(&word)) {
                Some(roots) => WordKind::Compound { roots },
                None => WordKind::Root,
            },
        };

        Ok(LexiconEntry {
            word,
            pronunciation: self.pronunciation,
            definition: self.definition.unwrap_or_default(),
            domain: self.domain.unwrap_or_default(),
            part_of_speech: self.part_of_speech.unwrap_or_default(),
            kind,
            derived_words: BTreeSet::new(),
            etymology_note: self.etymology_note,
        })
    }
}

/// Detect compound structure from the hyphen-joining convention.
///
/// Returns the hyphen-delimited root components, or `None` for a plain word.
pub fn detect_compound_roots(word: &str) -> Option<Vec<String>> {
    if word.contains('-') {
        Some(word.split('-').map(str::to_string).collect())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_entry() {
        let entry = LexiconEntry::root("ami", "friend", "Society", "noun").unwrap();
        assert_eq!(entry.kind, WordKind::Root);
        assert!(entry.roots().is_none());
    }

    #[test]
    fn test_compound_entry_requires_roots() {
        let err = LexiconEntry::compound("ami-lum", "warm feeling", "Emotion", "noun", vec![]);
        assert!(err.is_err());

        let entry = LexiconEntry::compound(
            "ami-lum",
            "warm feeling",
            "Emotion",
            "noun",
            vec!["ami".to_string(), "lum".to_string()],
        )
        .unwrap();
        assert_eq!(entry.roots().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_word_rejected() {
        assert!(LexiconEntry::root("", "x", "y", "z").is_err());
    }

    #[test]
    fn test_detect_compound_roots() {
        assert_eq!(
            detect_compound_roots("ami-lum"),
            Some(vec!["ami".to_string(), "lum".to_string()])
        );
        assert_eq!(detect_compound_roots("ami"), None);
    }

    #[test]
    fn test_raw_entry_infers_kind_from_hyphen() {
        let raw: RawEntry = serde_json::from_str(
            r#"{"word": "kor-pet", "definition": "grief", "domain": "Emotion"}"#,
        )
        .unwrap();
        let entry = raw.into_entry().unwrap();
        assert_eq!(entry.kind.label(), "Compound");
        assert_eq!(entry.roots().unwrap(), ["kor", "pet"]);
    }

    #[test]
    fn test_raw_entry_explicit_compound_without_roots_rejected() {
        let raw: RawEntry =
            serde_json::from_str(r#"{"word": "kor-pet", "word_type": "Compound"}"#).unwrap();
        assert!(raw.into_entry().is_err());
    }

    #[test]
    fn test_raw_entry_root_with_roots_rejected() {
        let raw: RawEntry = serde_json::from_str(
            r#"{"word": "kor", "word_type": "Root", "roots": ["k", "or"]}"#,
        )
        .unwrap();
        assert!(raw.into_entry().is_err());
    }

    #[test]
    fn test_raw_entry_missing_word_rejected() {
        let raw: RawEntry = serde_json::from_str(r#"{"definition": "orphan"}"#).unwrap();
        assert!(raw.into_entry().is_err());
    }
}
