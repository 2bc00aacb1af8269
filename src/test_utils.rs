//! Record builders shared by the unit tests.

use crate::catalog::{
    MessageShape,
    TranslationRecord,
};

/// Builds a translated record of the given shape.
///
/// Context, plural text, translations and comments are derived from `msgid`, so records
/// built from different ids differ in every field. Plural records get two forms.
pub(crate) fn record_of_shape(shape: MessageShape, msgid: &str) -> TranslationRecord {
    let msgctxt = format!("{msgid} context");
    let msgid_plural = format!("{msgid} (plural)");
    let one = format!("{msgid} translated");
    let other = format!("{msgid} translated (plural)");

    let record = match shape {
        MessageShape::Singular => TranslationRecord::singular(msgid, one),
        MessageShape::Contextual => TranslationRecord::contextual(msgctxt, msgid, one),
        MessageShape::Plural => TranslationRecord::plural(msgid, msgid_plural, [one, other]),
        MessageShape::ContextualPlural => {
            TranslationRecord::contextual_plural(msgctxt, msgid, msgid_plural, [one, other])
        }
    };

    record.with_comments([format!("comment on {msgid}")]).with_flags([format!("{msgid}-flag")])
}
