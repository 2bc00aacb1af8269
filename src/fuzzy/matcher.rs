//! Threshold-based fuzzy matching.

use super::similarity::similarity;
use crate::catalog::MessageKey;

/// Threshold conventionally used by catalog merge tools.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Outcome of comparing two message keys against a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchResult {
    /// The similarity reached the threshold.
    Match {
        /// Similarity of the two keys
        score: f64,
    },
    /// The similarity stayed below the threshold.
    NoMatch,
}

impl MatchResult {
    /// Score of a match, `None` otherwise.
    #[must_use]
    pub const fn score(self) -> Option<f64> {
        match self {
            Self::Match { score } => Some(score),
            Self::NoMatch => None,
        }
    }

    /// Returns true for [`MatchResult::Match`].
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Decides whether two message keys are similar enough to carry a translation over.
///
/// A pair matches when its [`similarity`] is greater than or equal to the threshold. The
/// threshold is not range checked: anything above `1.0` never matches and anything at or
/// below `0.0` always does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    /// Minimum score for a match (inclusive)
    threshold: f64,
}

impl Matcher {
    /// Creates a matcher; the threshold is used as given.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Minimum score for a match.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Scores the pair and classifies it against the threshold.
    #[must_use]
    pub fn evaluate(&self, key1: &MessageKey<'_>, key2: &MessageKey<'_>) -> MatchResult {
        let score = similarity(key1, key2);
        tracing::trace!("Similarity of '{}' and '{}': {}", key1, key2, score);

        if score >= self.threshold { MatchResult::Match { score } } else { MatchResult::NoMatch }
    }

    /// Shorthand for `evaluate(..).is_match()`.
    #[must_use]
    pub fn is_match(&self, key1: &MessageKey<'_>, key2: &MessageKey<'_>) -> bool {
        self.evaluate(key1, key2).is_match()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Builds a [`Matcher`] for the given threshold.
#[must_use]
pub const fn build_matcher(threshold: f64) -> Matcher {
    Matcher::new(threshold)
}
