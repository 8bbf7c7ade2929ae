//! # Lexward - Lexicon Proposal Validation
//!
//! Lexward screens proposed vocabulary entries for a constructed-language
//! lexicon before they reach human review by the Language Council.
//!
//! ## Overview
//!
//! A proposal arrives as free-form markdown with labeled sections (word,
//! definition, semantic domain, justification). The pipeline extracts and
//! sanitizes those fields, then runs four independent checks over a read-only
//! snapshot of the existing lexicon and the fixed phoneme inventory:
//!
//! - **Phonotactics**: phoneme membership, hyphenation, syllable structure,
//!   consonant clusters
//! - **Lexicon consistency**: duplicates, compound root existence, domain
//!   plausibility
//! - **Homophones**: pronunciation similarity against every existing word
//! - **Semantics**: domain membership, definition and justification presence
//!
//! The four outcomes reduce to a single recommendation (Approve, Review,
//! Reject, or Error), rendered as a markdown report.
//!
//! ## Modules
//!
//! - [`schema`] - Lexicon entry data model (root vs. compound words)
//! - [`lexicon`] - Lexicon snapshot loading and indexing
//! - [`phonology`] - Phoneme inventory and rules-document loading
//! - [`extract`] - Proposal field extraction and sanitization
//! - [`checks`] - The four validation checks and the analysis pipeline
//! - [`outcome`] - Check statuses, messages, and recommendation aggregation
//! - [`report`] - Markdown report rendering
//!
//! ## Example
//!
//! ```no_run
//! use lexward::checks::{analyze_proposal, AnalysisContext};
//! use lexward::extract::extract_fields;
//! use lexward::lexicon::LexiconStore;
//! use lexward::phonology::PhonemeInventory;
//! use lexward::report::format_report;
//! use std::path::Path;
//!
//! let lexicon = LexiconStore::load(Path::new("lexicon.json")).expect("lexicon");
//! let phonemes = PhonemeInventory::load(Path::new("PHONOLOGY.md")).expect("rules");
//! let ctx = AnalysisContext::new(&lexicon, &phonemes);
//!
//! let fields = extract_fields("### Proposed Word\nami-lum\n### Definition\nwarm glow");
//! let result = analyze_proposal(&ctx, &fields);
//! println!("{}", format_report(&result));
//! ```

pub mod checks;
pub mod extract;
pub mod lexicon;
pub mod outcome;
pub mod phonology;
pub mod report;
pub mod schema;
pub mod ui;

/// Default file path constants.
pub mod paths {
    /// Lexicon snapshot: `lexicon.json`
    pub const LEXICON_FILE: &str = "lexicon.json";
    /// Phonological rules document: `PHONOLOGY.md`
    pub const RULES_FILE: &str = "PHONOLOGY.md";
}

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// This function uses `chrono::Utc::now()` to ensure the timestamp is truly in
/// UTC, not local time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
