//! Lexicon consistency: duplicates, compound root existence, and domain
//! plausibility.

use std::collections::{BTreeMap, BTreeSet};

use crate::lexicon::LexiconStore;
use crate::outcome::{CheckOutcome, CheckStatus};

/// Mapping from a target domain to the root domains considered semantically
/// compatible with it. A small placeholder policy, not a load-bearing
/// linguistic rule; the rules document may override it wholesale.
#[derive(Debug, Clone)]
pub struct DomainCompatibility {
    table: BTreeMap<String, BTreeSet<String>>,
}

impl Default for DomainCompatibility {
    /// The built-in table, e.g. heart + stone = grief, hand + tool = work.
    fn default() -> Self {
        let entries: [(&str, &[&str]); 3] = [
            ("Emotion", &["Body", "Nature", "Quality"]),
            ("Action", &["Body", "Object", "Nature"]),
            ("Quality", &["Nature", "Object", "Body"]),
        ];
        let table = entries
            .iter()
            .map(|(target, compatible)| {
                (
                    target.to_string(),
                    compatible.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        Self { table }
    }
}

impl DomainCompatibility {
    /// Replace the built-in policy with a table from the rules document.
    pub fn from_table(table: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { table }
    }

    /// Whether a root in `root_domain` plausibly supports a compound in
    /// `target` domain.
    pub fn compatible(&self, target: &str, root_domain: &str) -> bool {
        self.table
            .get(target)
            .is_some_and(|set| set.contains(root_domain))
    }
}

/// Run the lexicon consistency check for a candidate word and its proposed
/// domain.
pub fn check_consistency(
    word: &str,
    domain: &str,
    store: &LexiconStore,
    compatibility: &DomainCompatibility,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::new();

    // 1. Verbatim duplicate.
    if let Some(existing) = store.get(word) {
        outcome.fail(format!(
            "Word '{}' already exists in lexicon with definition: {}",
            word, existing.definition
        ));
    } else {
        outcome.pass(format!("Word '{}' is not already in lexicon", word));
    }

    // 2. Compound roots must exist. Short-circuits the domain check: a
    //    missing root leaves nothing meaningful to compare domains against.
    if word.contains('-') {
        let roots: Vec<&str> = word.split('-').collect();
        match roots.iter().find(|root| !store.contains(root)) {
            Some(missing) => {
                outcome.fail(format!("Root word '{}' not found in lexicon", missing));
            }
            None => {
                for root in &roots {
                    if let Some(entry) = store.get(root) {
                        outcome.pass(format!(
                            "Root '{}' exists in lexicon ({}: {})",
                            root, entry.domain, entry.definition
                        ));
                    }
                }
            }
        }

        // 3. Domain plausibility, a heuristic only: mismatch warns, never
        //    blocks.
        if outcome.status != CheckStatus::Fail {
            check_domain_plausibility(domain, &roots, store, compatibility, &mut outcome);
        }
    }

    outcome
}

fn check_domain_plausibility(
    proposed: &str,
    roots: &[&str],
    store: &LexiconStore,
    compatibility: &DomainCompatibility,
    outcome: &mut CheckOutcome,
) {
    let root_domains: Vec<&str> = roots
        .iter()
        .filter_map(|root| store.get(root).map(|e| e.domain.as_str()))
        .collect();
    let joined = root_domains.join(", ");

    if root_domains.contains(&proposed) {
        outcome.pass(format!(
            "Domain '{}' is consistent with root domains: {}",
            proposed, joined
        ));
    } else if root_domains
        .iter()
        .any(|root_domain| compatibility.compatible(proposed, root_domain))
    {
        outcome.pass(format!(
            "Domain '{}' is semantically compatible with root domains: {}",
            proposed, joined
        ));
    } else {
        outcome.warn(format!(
            "Domain '{}' may not be consistent with root domains: {}. \
             Consider if this combination makes semantic sense.",
            proposed, joined
        ));
    }
}
