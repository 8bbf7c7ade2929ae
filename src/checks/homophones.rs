//! Homophone detection: pronunciation similarity against the whole lexicon.
//!
//! The orthography is phonemic, so a normalized spelling stands in for a
//! pronunciation: hyphens dropped, lowercased, with a couple of symbols
//! rewritten to their phonetic representation. Similarity is Levenshtein
//! distance scaled to [0, 1], with a flat bonus for near-identical lengths.

use crate::lexicon::LexiconStore;
use crate::outcome::CheckOutcome;

/// Candidates scoring above this are reported as potential conflicts.
const SIMILARITY_THRESHOLD: f64 = 0.6;
/// A best match above this gets the dedicated "likely homophone" warning.
const LIKELY_HOMOPHONE_THRESHOLD: f64 = 0.9;
/// Flat bonus for pronunciations whose lengths differ by at most one symbol.
const LENGTH_BONUS: f64 = 0.1;

/// A lexicon word whose pronunciation scored above the threshold.
#[derive(Debug, Clone)]
pub struct SimilarWord {
    pub word: String,
    pub definition: String,
    pub similarity: f64,
}

/// Run the homophone check for a candidate word.
pub fn check_homophones(word: &str, store: &LexiconStore) -> CheckOutcome {
    let mut outcome = CheckOutcome::new();
    let matches = find_similar_pronunciations(word, store);

    match matches.first() {
        Some(best) if best.similarity > LIKELY_HOMOPHONE_THRESHOLD => {
            outcome.warn(format!(
                "Very similar pronunciation to '{}' ({}) - potential homophone conflict",
                best.word, best.definition
            ));
        }
        Some(_) => {
            outcome.warn("Similar pronunciation to existing words:");
            for similar in matches.iter().take(3) {
                outcome.note(format!(
                    "  • '{}' ({}) - similarity: {:.2}",
                    similar.word, similar.definition, similar.similarity
                ));
            }
        }
        None => outcome.pass("No pronunciation conflicts detected"),
    }

    outcome
}

/// Score the candidate against every other word in the store, keeping those
/// above the threshold, sorted by similarity descending.
pub fn find_similar_pronunciations(word: &str, store: &LexiconStore) -> Vec<SimilarWord> {
    let candidate = normalize_pronunciation(word);

    let mut matches: Vec<SimilarWord> = store
        .iter()
        .filter(|entry| entry.word != word)
        .filter_map(|entry| {
            let score = similarity(&candidate, &normalize_pronunciation(&entry.word));
            (score > SIMILARITY_THRESHOLD).then(|| SimilarWord {
                word: entry.word.clone(),
                definition: entry.definition.clone(),
                similarity: score,
            })
        })
        .collect();

    // Descending score; ties in word order for determinism.
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });
    matches
}

/// Derive the normalized pronunciation for a word: hyphens stripped,
/// lowercased, and the symbol substitutions applied.
pub fn normalize_pronunciation(word: &str) -> String {
    word.chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'r' => 'ɾ', // alveolar tap
            'j' => 'y', // palatal approximant
            other => other,
        })
        .collect()
}

/// Pronunciation similarity in [0, 1]: `1 - distance/max_len`, plus the
/// length bonus when the lengths differ by at most one symbol, capped at 1.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let max_len = a.len().max(b.len());
    let mut score = 1.0 - levenshtein(&a, &b) as f64 / max_len as f64;

    if a.len().abs_diff(b.len()) <= 1 {
        score += LENGTH_BONUS;
    }
    score.min(1.0)
}

/// Classic single-character insert/delete/substitute edit distance, two-row
/// formulation.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut current = vec![i + 1];
        for (j, cb) in b.iter().enumerate() {
            let insertions = previous[j + 1] + 1;
            let deletions = current[j] + 1;
            let substitutions = previous[j] + usize::from(ca != cb);
            current.push(insertions.min(deletions).min(substitutions));
        }
        previous = current;
    }
    previous[b.len()]
}
