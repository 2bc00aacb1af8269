//! Similarity scoring between message keys.

use crate::catalog::MessageKey;

/// Scores how alike two message keys are, from `0.0` (nothing in common) to `1.0` (identical).
///
/// Only the primary `msgid` of each key is compared; `msgctxt` and `msgid_plural` are
/// ignored, so keys of different shapes can be scored against each other. The score is the
/// Jaro similarity of the two texts, which is exactly `0.0` when no characters match.
#[must_use]
pub fn similarity(key1: &MessageKey<'_>, key2: &MessageKey<'_>) -> f64 {
    let (text1, text2) = (key1.msgid(), key2.msgid());

    // Jaro's greedy matching walks the first argument, so order canonically to keep
    // `similarity(a, b) == similarity(b, a)` bit for bit.
    if text1 <= text2 { strsim::jaro(text1, text2) } else { strsim::jaro(text2, text1) }
}
