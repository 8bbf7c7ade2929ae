//! Check outcomes and recommendation aggregation.
//!
//! Checkers never raise: each returns a [`CheckOutcome`] carrying a tagged
//! status and an ordered audit trail of messages, one per check step. The
//! aggregator reduces the four outcomes to one [`Recommendation`] using a
//! fixed precedence: Error > Fail > Warning > Pass. Error outranks a
//! confirmed Fail because an errored check never ran and its true status is
//! unknown.

use std::fmt;

/// Status of a single check category.
///
/// Ordered by severity so "worst of" combines with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckStatus {
    Pending,
    Pass,
    Warning,
    Fail,
    Error,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Pass => write!(f, "PASS"),
            Self::Warning => write!(f, "WARNING"),
            Self::Fail => write!(f, "FAIL"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// One line of a check's audit trail. Each message carries its own marker so
/// the report can show the full pass/fail history, not just the final status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckMessage {
    Pass(String),
    Warning(String),
    Fail(String),
    Error(String),
    /// Supplementary detail line, rendered without a marker.
    Note(String),
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(text) => write!(f, "✅ PASS: {}", text),
            Self::Warning(text) => write!(f, "⚠️ WARNING: {}", text),
            Self::Fail(text) => write!(f, "❌ FAIL: {}", text),
            Self::Error(text) => write!(f, "❌ ERROR: {}", text),
            Self::Note(text) => write!(f, "{}", text),
        }
    }
}

/// Outcome of one check category: worst status seen plus the message trail.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub status: CheckStatus,
    pub messages: Vec<CheckMessage>,
}

impl Default for CheckOutcome {
    fn default() -> Self {
        Self {
            status: CheckStatus::Pending,
            messages: Vec::new(),
        }
    }
}

impl CheckOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a passing step.
    pub fn pass(&mut self, text: impl Into<String>) {
        self.messages.push(CheckMessage::Pass(text.into()));
        self.status = self.status.max(CheckStatus::Pass);
    }

    /// Record a warning step.
    pub fn warn(&mut self, text: impl Into<String>) {
        self.messages.push(CheckMessage::Warning(text.into()));
        self.status = self.status.max(CheckStatus::Warning);
    }

    /// Record a failing step.
    pub fn fail(&mut self, text: impl Into<String>) {
        self.messages.push(CheckMessage::Fail(text.into()));
        self.status = self.status.max(CheckStatus::Fail);
    }

    /// Record a check-level error (the check could not run).
    pub fn error(&mut self, text: impl Into<String>) {
        self.messages.push(CheckMessage::Error(text.into()));
        self.status = CheckStatus::Error;
    }

    /// Record a supplementary detail line without affecting the status.
    pub fn note(&mut self, text: impl Into<String>) {
        self.messages.push(CheckMessage::Note(text.into()));
    }

    /// An outcome pre-set to Error with a single message.
    pub fn errored(text: impl Into<String>) -> Self {
        let mut outcome = Self::new();
        outcome.error(text);
        outcome
    }
}

/// Overall verdict for a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Pending,
    Approve,
    Review,
    Reject,
    Error,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approve => write!(f, "APPROVE"),
            Self::Review => write!(f, "REVIEW"),
            Self::Reject => write!(f, "REJECT"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Complete analysis of one proposal. Created fresh per proposal; no state is
/// shared between runs.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    pub phonotactics: CheckOutcome,
    pub lexicon: CheckOutcome,
    pub homophones: CheckOutcome,
    pub semantics: CheckOutcome,
    pub recommendation: Option<Recommendation>,
}

impl AnalysisResult {
    /// The four outcomes paired with their display names, in report order.
    pub fn sections(&self) -> [(&'static str, &CheckOutcome); 4] {
        [
            ("Phonotactic", &self.phonotactics),
            ("Lexicon", &self.lexicon),
            ("Homophone", &self.homophones),
            ("Semantic", &self.semantics),
        ]
    }

    /// The overall verdict; `Pending` until aggregation has run.
    pub fn recommendation(&self) -> Recommendation {
        self.recommendation.unwrap_or(Recommendation::Pending)
    }

    /// Reduce the four check statuses to one recommendation.
    pub fn aggregate(&mut self) {
        let worst = self
            .sections()
            .iter()
            .map(|(_, outcome)| outcome.status)
            .max()
            .unwrap_or(CheckStatus::Pending);

        self.recommendation = Some(match worst {
            CheckStatus::Error => Recommendation::Error,
            CheckStatus::Fail => Recommendation::Reject,
            CheckStatus::Warning => Recommendation::Review,
            CheckStatus::Pass => Recommendation::Approve,
            CheckStatus::Pending => Recommendation::Pending,
        });
    }

    /// Result for a proposal that failed the structural pre-gate: every check
    /// is marked Error because none of them could run.
    pub fn structural_error(message: &str) -> Self {
        Self {
            phonotactics: CheckOutcome::errored(message),
            lexicon: CheckOutcome::errored(message),
            homophones: CheckOutcome::errored(message),
            semantics: CheckOutcome::errored(message),
            recommendation: Some(Recommendation::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome_with(status: CheckStatus) -> CheckOutcome {
        let mut outcome = CheckOutcome::new();
        match status {
            CheckStatus::Pending => {}
            CheckStatus::Pass => outcome.pass("ok"),
            CheckStatus::Warning => outcome.warn("hm"),
            CheckStatus::Fail => outcome.fail("no"),
            CheckStatus::Error => outcome.error("boom"),
        }
        outcome
    }

    fn aggregate_of(statuses: [CheckStatus; 4]) -> Recommendation {
        let mut result = AnalysisResult {
            phonotactics: outcome_with(statuses[0]),
            lexicon: outcome_with(statuses[1]),
            homophones: outcome_with(statuses[2]),
            semantics: outcome_with(statuses[3]),
            recommendation: None,
        };
        result.aggregate();
        result.recommendation()
    }

    #[test]
    fn test_status_ordering() {
        assert!(CheckStatus::Error > CheckStatus::Fail);
        assert!(CheckStatus::Fail > CheckStatus::Warning);
        assert!(CheckStatus::Warning > CheckStatus::Pass);
        assert!(CheckStatus::Pass > CheckStatus::Pending);
    }

    #[test]
    fn test_worst_status_wins_within_outcome() {
        let mut outcome = CheckOutcome::new();
        outcome.pass("first");
        outcome.warn("second");
        outcome.pass("third");
        assert_eq!(outcome.status, CheckStatus::Warning);
        assert_eq!(outcome.messages.len(), 3);
    }

    #[test]
    fn test_aggregate_precedence_exhaustive() {
        use CheckStatus::*;
        let all = [Pass, Warning, Fail, Error];
        for a in all {
            for b in all {
                for c in all {
                    for d in all {
                        let worst = a.max(b).max(c).max(d);
                        let expected = match worst {
                            Error => Recommendation::Error,
                            Fail => Recommendation::Reject,
                            Warning => Recommendation::Review,
                            Pass => Recommendation::Approve,
                            Pending => unreachable!(),
                        };
                        assert_eq!(aggregate_of([a, b, c, d]), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_structural_error_marks_every_check() {
        let result = AnalysisResult::structural_error("no word provided in proposal");
        for (_, outcome) in result.sections() {
            assert_eq!(outcome.status, CheckStatus::Error);
            assert_eq!(outcome.messages.len(), 1);
        }
        assert_eq!(result.recommendation(), Recommendation::Error);
    }

    #[test]
    fn test_message_markers() {
        assert_eq!(
            CheckMessage::Pass("all good".into()).to_string(),
            "✅ PASS: all good"
        );
        assert_eq!(
            CheckMessage::Fail("bad".into()).to_string(),
            "❌ FAIL: bad"
        );
        assert_eq!(CheckMessage::Note("detail".into()).to_string(), "detail");
    }
}
