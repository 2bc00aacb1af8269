//! Carrying an existing translation over to a new catalog entry.

use crate::catalog::{
    FUZZY_FLAG,
    Message,
    MessageShape,
    TranslationRecord,
};

/// How translated content moves from the existing record into the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Singular into singular: the string is copied as is.
    CopySingular,
    /// Plural into singular: the translation at plural index 0 becomes the string.
    CollapsePlural,
    /// Singular into plural: every plural slot of the new record receives the string.
    BroadcastSingular,
    /// Plural into plural: the whole indexed map is copied, index set included.
    CopyPlural,
}

impl MergeStrategy {
    /// Selects the strategy for merging a record shaped `existing` into one shaped `new`.
    #[must_use]
    pub const fn select(new: MessageShape, existing: MessageShape) -> Self {
        match (new.is_plural(), existing.is_plural()) {
            (false, false) => Self::CopySingular,
            (false, true) => Self::CollapsePlural,
            (true, false) => Self::BroadcastSingular,
            (true, true) => Self::CopyPlural,
        }
    }
}

/// Merges the translation of `existing` into the structure of `new`.
///
/// The result keeps the shape and identifying fields of `new`, takes its translated content
/// and comments from `existing`, and gains the `fuzzy` flag on top of the flags of `new`.
/// No similarity check is done here; the caller has already decided the two records match.
#[must_use]
pub fn merge(new: &TranslationRecord, existing: &TranslationRecord) -> TranslationRecord {
    let mut merged = new.clone();
    merged.comments.clone_from(&existing.comments);

    let strategy = match (&mut merged.message, &existing.message) {
        (
            Message::Singular { msgstr, .. } | Message::Contextual { msgstr, .. },
            Message::Singular { msgstr: source, .. } | Message::Contextual { msgstr: source, .. },
        ) => {
            msgstr.clone_from(source);
            MergeStrategy::CopySingular
        }
        (
            Message::Singular { msgstr, .. } | Message::Contextual { msgstr, .. },
            Message::Plural { msgstr: source, .. }
            | Message::ContextualPlural { msgstr: source, .. },
        ) => {
            *msgstr = source.get(&0).cloned().unwrap_or_default();
            MergeStrategy::CollapsePlural
        }
        (
            Message::Plural { msgstr, .. } | Message::ContextualPlural { msgstr, .. },
            Message::Singular { msgstr: source, .. } | Message::Contextual { msgstr: source, .. },
        ) => {
            for slot in msgstr.values_mut() {
                slot.clone_from(source);
            }
            MergeStrategy::BroadcastSingular
        }
        (
            Message::Plural { msgstr, .. } | Message::ContextualPlural { msgstr, .. },
            Message::Plural { msgstr: source, .. }
            | Message::ContextualPlural { msgstr: source, .. },
        ) => {
            msgstr.clone_from(source);
            MergeStrategy::CopyPlural
        }
    };

    tracing::debug!(
        "Merged '{}' into '{}' as fuzzy ({:?})",
        existing.key(),
        new.key(),
        strategy
    );

    merged.flags.insert(FUZZY_FLAG.to_string());
    merged
}
