//! Centralized UI formatting and color utilities
//!
//! This module provides a unified interface for status colors, icons, and
//! stderr diagnostics used throughout the lexward CLI. Diagnostics always go
//! to stderr so they never mix into the report on stdout.

use colored::{ColoredString, Colorize};

use crate::outcome::{CheckStatus, Recommendation};

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("LEXWARD_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Print an informational diagnostic to stderr.
pub fn info(message: &str) {
    if !is_quiet() {
        eprintln!("{}", message.dimmed());
    }
}

/// Print a warning diagnostic to stderr.
pub fn warn(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }
}

/// Print an error diagnostic to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

/// Returns a colored icon for the given check status.
///
/// Icons:
/// - Pending: ○ (white)
/// - Pass: ● (green)
/// - Warning: ⚠ (yellow)
/// - Fail: ✗ (red)
/// - Error: ⊗ (red)
pub fn status_icon(status: CheckStatus) -> ColoredString {
    match status {
        CheckStatus::Pending => "○".white(),
        CheckStatus::Pass => "●".green(),
        CheckStatus::Warning => "⚠".yellow(),
        CheckStatus::Fail => "✗".red(),
        CheckStatus::Error => "⊗".red(),
    }
}

/// Returns a colored label for the overall recommendation.
pub fn recommendation_label(recommendation: Recommendation) -> ColoredString {
    match recommendation {
        Recommendation::Pending => "PENDING".white(),
        Recommendation::Approve => "APPROVE".green(),
        Recommendation::Review => "REVIEW".yellow(),
        Recommendation::Reject => "REJECT".red(),
        Recommendation::Error => "ERROR".red().bold(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/completion
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (words, domains)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icon_all_statuses() {
        status_icon(CheckStatus::Pending);
        status_icon(CheckStatus::Pass);
        status_icon(CheckStatus::Warning);
        status_icon(CheckStatus::Fail);
        status_icon(CheckStatus::Error);
    }

    #[test]
    fn test_recommendation_labels() {
        assert!(recommendation_label(Recommendation::Approve)
            .to_string()
            .contains("APPROVE"));
        assert!(recommendation_label(Recommendation::Error)
            .to_string()
            .contains("ERROR"));
    }
}
