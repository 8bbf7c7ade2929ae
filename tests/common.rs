//! Common test helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Default rules document used by fixtures: the official inventory plus the
/// built-in compatibility table spelled out in frontmatter.
pub const RULES_DOC: &str = "---\n\
consonants: [p, b, t, d, k, g, m, n, f, s, h, l, r, w, j]\n\
vowels: [a, e, i, o, u]\n\
clusters: [st, pl, pr, tr, sp]\n\
compatible_domains:\n\
  Emotion: [Body, Nature, Quality]\n\
  Action: [Body, Object, Nature]\n\
  Quality: [Nature, Object, Body]\n\
---\n\
# Phonology\n\
\n\
Fifteen consonants, five vowels, five permitted clusters.\n";

/// Write a rules document into `dir` and return its path.
pub fn write_rules(dir: &Path) -> PathBuf {
    let path = dir.join("PHONOLOGY.md");
    fs::write(&path, RULES_DOC).expect("write rules document");
    path
}

/// Write a lexicon snapshot into `dir` and return its path. Entries are
/// `(word, definition, domain)` triples; compounds are inferred from hyphens.
pub fn write_lexicon(dir: &Path, entries: &[(&str, &str, &str)]) -> PathBuf {
    let items: Vec<serde_json::Value> = entries
        .iter()
        .map(|(word, definition, domain)| {
            serde_json::json!({
                "word": word,
                "definition": definition,
                "domain": domain,
                "part_of_speech": "noun",
            })
        })
        .collect();
    let path = dir.join("lexicon.json");
    fs::write(&path, serde_json::to_string_pretty(&items).unwrap()).expect("write lexicon");
    path
}

/// A small but representative lexicon: roots across several domains plus one
/// existing compound.
pub fn seed_entries() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("ami", "friend", "Society"),
        ("lum", "light", "Emotion"),
        ("kor", "heart", "Body"),
        ("pet", "stone", "Nature"),
        ("mira", "mirror", "Object"),
        ("sole", "sun", "Nature"),
        ("kor-pet", "grief", "Emotion"),
    ]
}
