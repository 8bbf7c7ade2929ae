//! Markdown report rendering.
//!
//! A pure function of the [`AnalysisResult`]: nothing is recomputed here.
//! The report carries a verdict header, one subsection per check with its
//! messages in production order, and a verdict-specific next-steps block.

use crate::outcome::{AnalysisResult, Recommendation};

/// Render the analysis result as a markdown document.
pub fn format_report(result: &AnalysisResult) -> String {
    let recommendation = result.recommendation();
    let mut lines: Vec<String> = Vec::new();

    lines.push(summary_header(recommendation).to_string());
    lines.push("\n---\n".to_string());
    lines.push("## 📋 Detailed Analysis\n".to_string());

    let blurbs = [
        "*Validates sound patterns and syllable structure*",
        "*Checks for duplicates and validates compound word roots*",
        "*Identifies potential pronunciation conflicts*",
        "*Validates meaning, domain, and justification*",
    ];
    let icons = ["🔤", "📚", "🔊", "🎯"];

    for (((name, outcome), blurb), icon) in result.sections().iter().zip(blurbs).zip(icons) {
        lines.push(format!("\n### {} {} Analysis", icon, name));
        lines.push(blurb.to_string());
        lines.push(String::new());
        for message in &outcome.messages {
            lines.push(message.to_string());
        }
    }

    lines.push("\n---\n".to_string());
    lines.push(next_steps(recommendation).to_string());

    lines.join("\n")
}

fn summary_header(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Approve => {
            "## ✅ **APPROVED** - Ready for Language Council Review\n\n\
             This proposal meets all automated validation requirements and is ready for \
             human review by the Language Council."
        }
        Recommendation::Review => {
            "## ⚠️ **NEEDS REVIEW** - Minor Issues Detected\n\n\
             This proposal has some warnings that should be addressed, but no critical \
             failures. The Language Council should review these concerns."
        }
        Recommendation::Reject => {
            "## ❌ **REJECTED** - Critical Issues Found\n\n\
             This proposal has critical issues that must be fixed before it can be \
             considered by the Language Council."
        }
        Recommendation::Error | Recommendation::Pending => {
            "## 🔧 **ANALYSIS ERROR** - Technical Issues\n\n\
             The automated analysis encountered technical problems. Please check your \
             proposal format or contact a maintainer."
        }
    }
}

fn next_steps(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Approve => {
            "## 🎯 Next Steps\n\n\
             **For Language Council Members:**\n\
             - ✅ All automated checks passed\n\
             - 🔍 Review the proposal for cultural appropriateness and linguistic fit\n\
             - 🗳️ Vote on acceptance or request a revision\n\n\
             **For the Community:**\n\
             - 💬 Feel free to discuss this proposal\n\
             - 📚 Consider how this word might be used in practice"
        }
        Recommendation::Review => {
            "## 🎯 Next Steps\n\n\
             **For the Contributor:**\n\
             - ⚠️ Review the warnings above and consider if changes are needed\n\
             - ✏️ Edit your proposal if you want to address the concerns\n\n\
             **For Language Council Members:**\n\
             - 🔍 Pay special attention to the flagged warnings\n\
             - 🗳️ Decide based on both automated analysis and human judgment"
        }
        Recommendation::Reject => {
            "## 🎯 Next Steps\n\n\
             **For the Contributor:**\n\
             - ❌ Please fix the critical issues identified above\n\
             - ✏️ Edit your proposal to address all FAIL items\n\
             - 💡 Refer to PHONOLOGY.md and lexicon.json for guidance\n\n\
             **Common Fixes:**\n\
             - 🔤 Use only the 20 official phonemes\n\
             - 🏗️ Ensure compound words use existing root words\n\
             - 📝 Provide a complete definition and justification\n\
             - 🎯 Select an appropriate semantic domain"
        }
        Recommendation::Error | Recommendation::Pending => {
            "## 🎯 Next Steps\n\n\
             **Technical Issue Detected:**\n\
             - 🔧 Please check that your proposal follows the correct format\n\
             - 📋 Ensure all required fields are filled out\n\
             - 🆘 If the problem persists, contact a maintainer"
        }
    }
}
