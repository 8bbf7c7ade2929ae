//! Phonotactic validation: phoneme membership, hyphenation, syllable
//! structure, and consonant clusters.
//!
//! Syllables follow a (C)V(C) template: an optional onset of one consonant,
//! or a permitted two-consonant cluster, then exactly one vowel nucleus, then
//! an optional single-consonant coda. A permitted cluster may open any
//! syllable except the very first syllable of the word; word-initial clusters
//! are disallowed outright.
//!
//! Every step appends one message to the outcome, pass or fail, so the report
//! carries the full audit trail.

use crate::outcome::CheckOutcome;
use crate::phonology::PhonemeInventory;

/// Run the full phonotactic check for a candidate word.
pub fn check_phonotactics(word: &str, inventory: &PhonemeInventory) -> CheckOutcome {
    let mut outcome = CheckOutcome::new();
    let word = word.to_lowercase();

    // 1. Every character (hyphens aside) must be a known phoneme.
    let mut invalid: Vec<char> = Vec::new();
    for c in word.chars().filter(|c| *c != '-') {
        if !inventory.is_phoneme(c) && !invalid.contains(&c) {
            invalid.push(c);
        }
    }
    if invalid.is_empty() {
        outcome.pass("All phonemes are valid sounds");
    } else {
        outcome.fail(format!(
            "Invalid phonemes found: {}",
            invalid
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ));
        outcome.note(format!(
            "Valid phonemes: {}",
            inventory
                .phonemes_sorted()
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    // 2. Hyphen placement for compound candidates.
    if word.contains('-') {
        match validate_hyphen_placement(&word) {
            Ok(()) => outcome.pass("Hyphen placement is correct for compound words"),
            Err(reason) => outcome.fail(reason),
        }
    }

    // 3. Per-part syllable well-formedness.
    match word
        .split('-')
        .find(|part| !is_valid_syllable_sequence(part, inventory))
    {
        None => outcome.pass("Syllable structure follows the phonotactic rules"),
        Some(part) => outcome.fail(format!("Invalid syllable structure in '{}'", part)),
    }

    // 4. Consonant cluster legality and position.
    match validate_consonant_clusters(&word, inventory) {
        Ok(()) => outcome.pass("Consonant clusters are valid"),
        Err(reason) => outcome.fail(reason),
    }

    outcome
}

/// Check hyphen placement: no boundary or doubled hyphens, and at least two
/// non-empty parts.
fn validate_hyphen_placement(word: &str) -> Result<(), String> {
    if word.contains("--") {
        return Err("Multiple consecutive hyphens not allowed".to_string());
    }
    if word.starts_with('-') || word.ends_with('-') {
        return Err("Hyphens cannot appear at word boundaries".to_string());
    }
    let parts: Vec<&str> = word.split('-').collect();
    if parts.len() < 2 {
        return Err("Hyphenated word must have at least two parts".to_string());
    }
    if parts.iter().any(|p| p.is_empty()) {
        return Err("Empty word part found".to_string());
    }
    Ok(())
}

/// Left-to-right syllable automaton over one hyphen-free part.
///
/// Consumes onset (single consonant or permitted cluster), then a vowel
/// nucleus, then decides whether a following consonant is a coda or belongs
/// to the next syllable: a consonant stays with its syllable only when it is
/// not immediately followed by a vowel and the two-consonant sequence it
/// would open is not itself a permitted cluster.
fn is_valid_syllable_sequence(part: &str, inventory: &PhonemeInventory) -> bool {
    let chars: Vec<char> = part.chars().collect();
    if chars.is_empty() {
        return false;
    }

    let mut i = 0;
    while i < chars.len() {
        // Onset: permitted cluster, single consonant, or nothing.
        if i + 1 < chars.len()
            && inventory.is_consonant(chars[i])
            && inventory.is_consonant(chars[i + 1])
        {
            let cluster: String = chars[i..i + 2].iter().collect();
            if !inventory.is_permitted_cluster(&cluster) {
                return false;
            }
            i += 2;
        } else if inventory.is_consonant(chars[i]) {
            i += 1;
        }

        // Nucleus: exactly one vowel.
        if i >= chars.len() || !inventory.is_vowel(chars[i]) {
            return false;
        }
        i += 1;

        // Coda: claim a trailing consonant unless the next syllable does.
        if i < chars.len() && inventory.is_consonant(chars[i]) {
            if i == chars.len() - 1 {
                i += 1;
            } else if inventory.is_vowel(chars[i + 1]) {
                // Consonant opens the next syllable.
            } else {
                let cluster: String = chars[i..i + 2].iter().collect();
                if !inventory.is_permitted_cluster(&cluster) {
                    // Not a cluster onset, so this consonant is the coda.
                    i += 1;
                }
            }
        }
    }
    true
}

/// Scan all parts for consonant runs: runs longer than two are rejected,
/// two-consonant runs must be permitted clusters, and no cluster may open the
/// first part of the word.
fn validate_consonant_clusters(word: &str, inventory: &PhonemeInventory) -> Result<(), String> {
    for (part_idx, part) in word.split('-').enumerate() {
        let chars: Vec<char> = part.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if !inventory.is_consonant(chars[i]) {
                i += 1;
                continue;
            }
            let run_start = i;
            while i < chars.len() && inventory.is_consonant(chars[i]) {
                i += 1;
            }
            if i - run_start < 2 {
                continue;
            }
            let cluster: String = chars[run_start..i].iter().collect();
            if cluster.chars().count() > 2 {
                return Err(format!(
                    "Consonant cluster '{}' is too long (max 2 consonants)",
                    cluster
                ));
            }
            if !inventory.is_permitted_cluster(&cluster) {
                return Err(format!(
                    "Consonant cluster '{}' is not permitted. Allowed clusters: {}",
                    cluster,
                    inventory.clusters_sorted().join(", ")
                ));
            }
            if run_start == 0 && part_idx == 0 {
                return Err(format!(
                    "Consonant cluster '{}' cannot appear at word beginning",
                    cluster
                ));
            }
        }
    }
    Ok(())
}
