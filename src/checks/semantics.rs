//! Semantic well-formedness: domain membership, definition and justification
//! presence.

use crate::lexicon::LexiconStore;
use crate::outcome::CheckOutcome;

/// Run the semantic check over the proposed domain, definition, and
/// justification. A missing justification is worth a warning, not a failure.
pub fn check_semantics(
    definition: &str,
    domain: &str,
    justification: &str,
    store: &LexiconStore,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::new();

    if store.domains().contains(domain) {
        outcome.pass(format!("Semantic domain '{}' is valid", domain));
    } else {
        outcome.fail(format!("Invalid semantic domain '{}'", domain));
    }

    if definition.is_empty() {
        outcome.fail("No definition provided");
    } else {
        outcome.pass("Definition provided");
    }

    if justification.is_empty() {
        outcome.warn("No justification provided");
    } else {
        outcome.pass("Justification provided");
    }

    outcome
}
