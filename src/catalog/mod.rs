//! Catalog data model
//!
//! Parsed translation records in the four shapes a gettext catalog knows:
//! singular, contextual, plural and contextual plural.

mod key;
mod record;

pub use key::{
    MessageKey,
    MessageShape,
};
pub use record::{
    FUZZY_FLAG,
    Message,
    TranslationRecord,
};
