//! Fuzzy matching of catalog entries
//!
//! When a catalog is regenerated, entries whose `msgid` changed slightly can keep their old
//! translation. [`Matcher`] decides which old entries are close enough to a new one, and
//! [`merge()`] carries the translation over, marking the result `fuzzy` for review.

/// Threshold matcher
mod matcher;
/// Translation carry-over
mod merge;
/// Similarity scoring
mod similarity;

pub use matcher::{
    DEFAULT_THRESHOLD,
    MatchResult,
    Matcher,
    build_matcher,
};
pub use merge::{
    MergeStrategy,
    merge,
};
pub use similarity::similarity;
