//! po-fuzzy-merge
//!
//! Fuzzy matching and merging of gettext catalog entries. When a template is regenerated,
//! entries whose source text changed slightly keep their previous translation, flagged
//! `fuzzy` for review.
//!
//! The crate does no catalog parsing or writing: it works on already parsed
//! [`TranslationRecord`]s and leaves the search over candidates to the caller.

pub mod catalog;
pub mod config;
pub mod fuzzy;
#[cfg(test)]
mod test_utils;

pub use catalog::{
    FUZZY_FLAG,
    Message,
    MessageKey,
    MessageShape,
    TranslationRecord,
};
pub use fuzzy::{
    MatchResult,
    Matcher,
    MergeStrategy,
    build_matcher,
    merge,
    similarity,
};
