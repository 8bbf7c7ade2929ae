//! Proposal field extraction and sanitization.
//!
//! A proposal arrives as one markdown blob with labeled `###` sections. Each
//! expected field is located by its heading, cleaned of list markers and
//! excess whitespace, then sanitized for safe inclusion in the report:
//! script and comment markup is dropped and markdown metacharacters are
//! backslash-escaped. A section that cannot be located yields an empty
//! string; that is expected input, not an error.

use regex::{Regex, RegexBuilder};

use crate::ui;

/// Maximum length of any extracted field, in characters.
const MAX_FIELD_LEN: usize = 1000;

/// Characters with special meaning in the report markup, escaped on sight.
const ESCAPED_CHARS: [char; 10] = ['`', '*', '_', '[', ']', '(', ')', '!', '<', '>'];

/// The four sanitized proposal fields. All possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposalFields {
    pub word: String,
    pub definition: String,
    pub domain: String,
    pub justification: String,
}

/// Extract and sanitize the four labeled sections from a proposal body.
///
/// Pure function of its input; missing or empty input yields all-empty
/// fields. Unlocatable sections are reported to stderr as warnings.
pub fn extract_fields(body: &str) -> ProposalFields {
    if body.trim().is_empty() {
        ui::warn("empty proposal body provided");
        return ProposalFields::default();
    }

    ProposalFields {
        word: extract_field(body, "word", "### Proposed Word"),
        definition: extract_field(body, "definition", "### Definition"),
        domain: extract_field(body, "domain", "### Semantic Domain"),
        justification: extract_field(body, "justification", "### Justification & Etymology"),
    }
}

fn extract_field(body: &str, name: &str, heading: &str) -> String {
    let value = match extract_section(body, heading) {
        Some(raw) => sanitize(&raw),
        None => {
            ui::warn(&format!("could not extract field '{}' from proposal", name));
            return String::new();
        }
    };
    if value.is_empty() {
        ui::warn(&format!("field '{}' is empty", name));
    }
    value
}

/// Locate one labeled section and return its raw block, up to the next `###`
/// heading or end of input.
fn extract_section(body: &str, heading: &str) -> Option<String> {
    let pattern = format!(r"(?s){}\s*\n(.+?)(?:\n### |\z)", regex::escape(heading));
    let re = Regex::new(&pattern).ok()?;
    re.captures(body)
        .map(|caps| caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default())
}

/// Sanitize user input for safe report embedding.
///
/// Drops script blocks and HTML comments, strips leading list markers,
/// collapses whitespace, escapes report metacharacters, and truncates to
/// [`MAX_FIELD_LEN`] characters with a `...` marker when cut.
pub fn sanitize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Script and comment markup has no business in a proposal field.
    let script = RegexBuilder::new(r"<script[^>]*>.*?</script>")
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .unwrap();
    let text = script.replace_all(text, "");
    let comment = RegexBuilder::new(r"<!--.*?-->")
        .dot_matches_new_line(true)
        .build()
        .unwrap();
    let text = comment.replace_all(&text, "");

    // Strip leading list markers per line, then collapse runs of whitespace.
    let list_markers = Regex::new(r"(?m)^\s*-\s*").unwrap();
    let text = list_markers.replace_all(&text, "");
    let whitespace = Regex::new(r"\s+").unwrap();
    let text = whitespace.replace_all(&text, " ");

    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPED_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    let mut result = escaped.trim().to_string();
    if result.chars().count() > MAX_FIELD_LEN {
        result = result.chars().take(MAX_FIELD_LEN).collect();
        result.push_str("...");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "### Proposed Word\n\
ami-lum\n\
\n\
### Definition\n\
A feeling of warmth toward a friend\n\
\n\
### Semantic Domain\n\
Emotion\n\
\n\
### Justification & Etymology\n\
From ami (friend) and lum (light)\n";

    #[test]
    fn test_extracts_all_four_fields() {
        let fields = extract_fields(SAMPLE);
        assert_eq!(fields.word, "ami-lum");
        assert_eq!(fields.definition, "A feeling of warmth toward a friend");
        assert_eq!(fields.domain, "Emotion");
        assert_eq!(fields.justification, "From ami \\(friend\\) and lum \\(light\\)");
    }

    #[test]
    fn test_empty_input_yields_empty_fields() {
        assert_eq!(extract_fields(""), ProposalFields::default());
        assert_eq!(extract_fields("   \n  "), ProposalFields::default());
    }

    #[test]
    fn test_missing_section_yields_empty_field() {
        let fields = extract_fields("### Proposed Word\nkora\n");
        assert_eq!(fields.word, "kora");
        assert_eq!(fields.definition, "");
        assert_eq!(fields.domain, "");
        assert_eq!(fields.justification, "");
    }

    #[test]
    fn test_list_markers_stripped_and_whitespace_collapsed() {
        let fields = extract_fields("### Definition\n- a stone\n-  found   in rivers\n");
        assert_eq!(fields.definition, "a stone found in rivers");
    }

    #[test]
    fn test_sanitize_escapes_markup_characters() {
        assert_eq!(sanitize("a `code` *bold*"), "a \\`code\\` \\*bold\\*");
        assert_eq!(sanitize("[link](url)"), "\\[link\\]\\(url\\)");
    }

    #[test]
    fn test_sanitize_drops_script_and_comments() {
        assert_eq!(sanitize("safe <script>alert(1)</script> text"), "safe text");
        assert_eq!(sanitize("before <!-- hidden --> after"), "before after");
    }

    #[test]
    fn test_sanitize_preserves_hyphens() {
        // Hyphens carry compound structure and must survive sanitization.
        assert_eq!(sanitize("ami-lum"), "ami-lum");
    }

    #[test]
    fn test_sanitize_truncates_long_input() {
        let long = "a".repeat(1500);
        let result = sanitize(&long);
        assert_eq!(result.chars().count(), 1003);
        assert!(result.ends_with("..."));
    }
}
