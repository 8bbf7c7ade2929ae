//! Lexicon snapshot loading and indexing.
//!
//! The store is built once per run from a persisted JSON snapshot and treated
//! as immutable for the duration of one proposal's analysis. Besides the
//! word-to-entry map it maintains a domain tally and a reverse index from each
//! root to the compounds that cite it, so bidirectional navigation never
//! rescans the snapshot.

use anyhow::{bail, Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::schema::{LexiconEntry, RawEntry, WordKind};
use crate::ui;

/// In-memory snapshot of the existing vocabulary. Read-only during validation.
#[derive(Debug, Default)]
pub struct LexiconStore {
    entries: BTreeMap<String, LexiconEntry>,
    domain_counts: BTreeMap<String, usize>,
    derived: BTreeMap<String, BTreeSet<String>>,
}

impl LexiconStore {
    /// Load a snapshot from disk.
    ///
    /// The file must contain a JSON array. Individually malformed entries are
    /// skipped with a stderr warning; a snapshot where every entry is invalid
    /// is a hard failure.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("lexicon file not found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon from {}", path.display()))?;
        let raw: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in lexicon file {}", path.display()))?;

        let items = match raw {
            serde_json::Value::Array(items) => items,
            _ => bail!("lexicon file must contain a JSON array"),
        };

        let total = items.len();
        let mut entries = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            let raw_entry: RawEntry = match serde_json::from_value(item) {
                Ok(raw_entry) => raw_entry,
                Err(e) => {
                    ui::warn(&format!("skipping invalid entry at index {}: {}", i, e));
                    continue;
                }
            };
            match raw_entry.into_entry() {
                Ok(entry) => entries.push(entry),
                Err(e) => ui::warn(&format!("skipping entry at index {}: {}", i, e)),
            }
        }

        if entries.is_empty() && total > 0 {
            bail!("no valid entries found in lexicon file");
        }

        let store = Self::from_entries(entries);
        ui::info(&format!(
            "Loaded {} words from lexicon ({} domains)",
            store.len(),
            store.domains().len()
        ));
        Ok(store)
    }

    /// Build a store from already-validated entries and index relationships.
    pub fn from_entries(entries: Vec<LexiconEntry>) -> Self {
        let mut store = Self::default();
        for entry in entries {
            store.insert(entry);
        }
        store.link_derived_words();
        store
    }

    fn insert(&mut self, entry: LexiconEntry) {
        if !entry.domain.is_empty() {
            *self.domain_counts.entry(entry.domain.clone()).or_insert(0) += 1;
        }
        if let WordKind::Compound { roots } = &entry.kind {
            for root in roots {
                self.derived
                    .entry(root.clone())
                    .or_default()
                    .insert(entry.word.clone());
            }
        }
        self.entries.insert(entry.word.clone(), entry);
    }

    /// Populate `derived_words` back-references and warn about compounds that
    /// cite roots missing from the snapshot.
    fn link_derived_words(&mut self) {
        let mut missing = Vec::new();
        for (root, compounds) in self.derived.clone() {
            match self.entries.get_mut(&root) {
                Some(entry) => entry.derived_words = compounds,
                None => missing.push(root),
            }
        }
        if !missing.is_empty() {
            ui::warn(&format!(
                "missing root words referenced by compounds: {}",
                missing.join(", ")
            ));
        }
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Iterate entries in word order.
    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.values()
    }

    /// The set of semantic domains present in the snapshot.
    pub fn domains(&self) -> BTreeSet<&str> {
        self.domain_counts.keys().map(String::as_str).collect()
    }

    /// Compounds that cite the given root.
    pub fn derived_words(&self, root: &str) -> Option<&BTreeSet<String>> {
        self.derived.get(root)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summarize the snapshot for the `stats` command.
    pub fn statistics(&self) -> LexiconStats {
        let root_words = self
            .iter()
            .filter(|e| matches!(e.kind, WordKind::Root))
            .count();
        let compound_words = self.len() - root_words;

        let mut productivity: Vec<(String, usize)> = self
            .derived
            .iter()
            .filter(|(root, _)| self.contains(root))
            .map(|(root, compounds)| (root.clone(), compounds.len()))
            .collect();
        productivity.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        productivity.truncate(10);

        let total_roots_cited: usize = self
            .iter()
            .filter_map(|e| e.roots().map(<[String]>::len))
            .sum();

        LexiconStats {
            total_words: self.len(),
            root_words,
            compound_words,
            domain_distribution: self.domain_counts.clone(),
            most_productive_roots: productivity,
            average_compound_breadth: total_roots_cited as f64 / compound_words.max(1) as f64,
        }
    }
}

/// Aggregate statistics over one snapshot.
#[derive(Debug)]
pub struct LexiconStats {
    pub total_words: usize,
    pub root_words: usize,
    pub compound_words: usize,
    pub domain_distribution: BTreeMap<String, usize>,
    /// Roots ranked by how many compounds cite them, top ten.
    pub most_productive_roots: Vec<(String, usize)>,
    /// Mean number of roots per compound.
    pub average_compound_breadth: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_store() -> LexiconStore {
        LexiconStore::from_entries(vec![
            LexiconEntry::root("ami", "friend", "Society", "noun").unwrap(),
            LexiconEntry::root("lum", "light", "Nature", "noun").unwrap(),
            LexiconEntry::compound(
                "ami-lum",
                "warmth of friendship",
                "Emotion",
                "noun",
                vec!["ami".to_string(), "lum".to_string()],
            )
            .unwrap(),
            LexiconEntry::compound(
                "lum-pet",
                "dawn",
                "Nature",
                "noun",
                vec!["lum".to_string(), "pet".to_string()],
            )
            .unwrap(),
        ])
    }

    #[test]
    fn test_derived_index_is_bidirectional() {
        let store = sample_store();
        let derived = store.derived_words("lum").unwrap();
        assert!(derived.contains("ami-lum"));
        assert!(derived.contains("lum-pet"));
        assert_eq!(store.get("lum").unwrap().derived_words, *derived);
    }

    #[test]
    fn test_domains() {
        let store = sample_store();
        let domains = store.domains();
        assert!(domains.contains("Emotion"));
        assert!(domains.contains("Nature"));
        assert!(domains.contains("Society"));
    }

    #[test]
    fn test_statistics() {
        let store = sample_store();
        let stats = store.statistics();
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.root_words, 2);
        assert_eq!(stats.compound_words, 2);
        assert_eq!(stats.most_productive_roots[0], ("lum".to_string(), 2));
        assert!((stats.average_compound_breadth - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_skips_invalid_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.json");
        fs::write(
            &path,
            r#"[
                {"word": "ami", "definition": "friend", "domain": "Society"},
                {"definition": "no word here"},
                "not even an object"
            ]"#,
        )
        .unwrap();

        let store = LexiconStore::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains("ami"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(LexiconStore::load(&tmp.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_load_rejects_non_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.json");
        fs::write(&path, r#"{"word": "ami"}"#).unwrap();
        assert!(LexiconStore::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_all_invalid_entries() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.json");
        fs::write(&path, r#"[{"definition": "x"}, {"definition": "y"}]"#).unwrap();
        assert!(LexiconStore::load(&path).is_err());
    }

    #[test]
    fn test_load_accepts_empty_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.json");
        fs::write(&path, "[]").unwrap();
        let store = LexiconStore::load(&path).unwrap();
        assert!(store.is_empty());
    }
}
