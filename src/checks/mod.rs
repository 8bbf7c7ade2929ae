//! The four validation checks and the analysis pipeline.
//!
//! Checks run independently over the same inputs and a shared read-only
//! [`AnalysisContext`]; no check can see or influence another's outcome.
//! Before any check runs, a structural gate rejects words that cannot be
//! evaluated at all (empty, over-length, or non-alphabetic): that produces
//! an Error recommendation, which is "could not evaluate", deliberately
//! distinct from "evaluated and found wanting".

pub mod consistency;
pub mod homophones;
pub mod phonotactics;
pub mod semantics;

use crate::extract::ProposalFields;
use crate::lexicon::LexiconStore;
use crate::outcome::AnalysisResult;
use crate::phonology::PhonemeInventory;
use crate::ui;

pub use consistency::DomainCompatibility;

/// Structural sanity bound on the candidate word, in characters.
const MAX_WORD_LEN: usize = 50;

/// Everything a check may read: the lexicon snapshot, the phoneme inventory,
/// and the domain-compatibility policy. Borrowed immutably by every check, so
/// distinct fixtures can run side by side in tests.
pub struct AnalysisContext<'a> {
    pub lexicon: &'a LexiconStore,
    pub phonemes: &'a PhonemeInventory,
    pub compatibility: DomainCompatibility,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(lexicon: &'a LexiconStore, phonemes: &'a PhonemeInventory) -> Self {
        Self {
            lexicon,
            phonemes,
            compatibility: DomainCompatibility::default(),
        }
    }

    /// Replace the built-in domain-compatibility policy.
    pub fn with_compatibility(mut self, compatibility: DomainCompatibility) -> Self {
        self.compatibility = compatibility;
        self
    }
}

/// Analyze one proposal start to finish: structural gate, the four checks,
/// then aggregation. Returns a fresh [`AnalysisResult`] every time.
pub fn analyze_proposal(ctx: &AnalysisContext, fields: &ProposalFields) -> AnalysisResult {
    if let Err(message) = structural_gate(&fields.word) {
        ui::error(&message);
        return AnalysisResult::structural_error(&message);
    }

    let mut result = AnalysisResult {
        phonotactics: phonotactics::check_phonotactics(&fields.word, ctx.phonemes),
        lexicon: consistency::check_consistency(
            &fields.word,
            &fields.domain,
            ctx.lexicon,
            &ctx.compatibility,
        ),
        homophones: homophones::check_homophones(&fields.word, ctx.lexicon),
        semantics: semantics::check_semantics(
            &fields.definition,
            &fields.domain,
            &fields.justification,
            ctx.lexicon,
        ),
        recommendation: None,
    };
    result.aggregate();
    result
}

/// Structural validity gate, not a linguistic one: the word must be present,
/// bounded, and made of letters and hyphens only.
fn structural_gate(word: &str) -> Result<(), String> {
    if word.is_empty() {
        return Err("No word provided in proposal".to_string());
    }
    let len = word.chars().count();
    if len > MAX_WORD_LEN {
        return Err(format!(
            "Proposed word is too long ({} characters, max {})",
            len, MAX_WORD_LEN
        ));
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic() || c == '-') {
        return Err("Word contains invalid characters (only letters and hyphens allowed)".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{CheckStatus, Recommendation};
    use crate::schema::LexiconEntry;

    fn store() -> LexiconStore {
        LexiconStore::from_entries(vec![
            LexiconEntry::root("ami", "friend", "Society", "noun").unwrap(),
            LexiconEntry::root("lum", "light", "Emotion", "noun").unwrap(),
        ])
    }

    fn fields(word: &str, definition: &str, domain: &str, justification: &str) -> ProposalFields {
        ProposalFields {
            word: word.to_string(),
            definition: definition.to_string(),
            domain: domain.to_string(),
            justification: justification.to_string(),
        }
    }

    #[test]
    fn test_clean_proposal_approved() {
        let store = store();
        let phonemes = PhonemeInventory::official();
        let ctx = AnalysisContext::new(&store, &phonemes);
        let result = analyze_proposal(
            &ctx,
            &fields("ami-lum", "warmth of friendship", "Emotion", "from ami and lum"),
        );
        assert_eq!(result.recommendation(), Recommendation::Approve);
    }

    #[test]
    fn test_empty_word_is_structural_error() {
        let store = store();
        let phonemes = PhonemeInventory::official();
        let ctx = AnalysisContext::new(&store, &phonemes);
        let result = analyze_proposal(&ctx, &fields("", "something", "Emotion", "because"));
        assert_eq!(result.recommendation(), Recommendation::Error);
        for (_, outcome) in result.sections() {
            assert_eq!(outcome.status, CheckStatus::Error);
        }
    }

    #[test]
    fn test_overlong_word_is_structural_error() {
        let store = store();
        let phonemes = PhonemeInventory::official();
        let ctx = AnalysisContext::new(&store, &phonemes);
        let long_word = "ta".repeat(30);
        let result = analyze_proposal(&ctx, &fields(&long_word, "x", "Emotion", "y"));
        assert_eq!(result.recommendation(), Recommendation::Error);
    }

    #[test]
    fn test_non_alphabetic_word_is_structural_error() {
        let store = store();
        let phonemes = PhonemeInventory::official();
        let ctx = AnalysisContext::new(&store, &phonemes);
        let result = analyze_proposal(&ctx, &fields("am1", "x", "Emotion", "y"));
        assert_eq!(result.recommendation(), Recommendation::Error);
    }

    #[test]
    fn test_illegal_phonemes_rejected() {
        let store = store();
        let phonemes = PhonemeInventory::official();
        let ctx = AnalysisContext::new(&store, &phonemes);
        let result = analyze_proposal(&ctx, &fields("xyza", "x", "Emotion", "y"));
        assert_eq!(result.recommendation(), Recommendation::Reject);
        assert_eq!(result.phonotactics.status, CheckStatus::Fail);
    }

    #[test]
    fn test_missing_justification_downgrades_to_review() {
        let store = store();
        let phonemes = PhonemeInventory::official();
        let ctx = AnalysisContext::new(&store, &phonemes);
        let result = analyze_proposal(&ctx, &fields("pesa", "a new root", "Emotion", ""));
        assert_eq!(result.recommendation(), Recommendation::Review);
    }
}
