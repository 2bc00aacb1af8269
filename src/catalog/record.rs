//! Translation records as handed over by the catalog parser.

use std::collections::{
    BTreeMap,
    BTreeSet,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::{
    MessageKey,
    MessageShape,
};

/// Flag marking a translation as approximate and in need of review.
pub const FUZZY_FLAG: &str = "fuzzy";

/// Identifying fields and translated content of a catalog message.
///
/// Plural translations are keyed by plural index, starting at 0 and contiguous up to the
/// number of plural forms of the target language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// `msgid` with a single translation.
    Singular {
        /// Source text
        msgid: String,
        /// Translation
        msgstr: String,
    },
    /// `msgid` under a context label, with a single translation.
    Contextual {
        /// Context label
        msgctxt: String,
        /// Source text
        msgid: String,
        /// Translation
        msgstr: String,
    },
    /// Singular and plural source text with indexed translations.
    Plural {
        /// Singular source text
        msgid: String,
        /// Plural source text
        msgid_plural: String,
        /// Translations by plural index
        msgstr: BTreeMap<u32, String>,
    },
    /// Plural message under a context label.
    ContextualPlural {
        /// Context label
        msgctxt: String,
        /// Singular source text
        msgid: String,
        /// Plural source text
        msgid_plural: String,
        /// Translations by plural index
        msgstr: BTreeMap<u32, String>,
    },
}

impl Message {
    /// Borrows the identifying fields.
    #[must_use]
    pub fn key(&self) -> MessageKey<'_> {
        match self {
            Self::Singular { msgid, .. } => MessageKey::Singular { msgid: msgid.as_str() },
            Self::Contextual { msgctxt, msgid, .. } => {
                MessageKey::Contextual { msgctxt: msgctxt.as_str(), msgid: msgid.as_str() }
            }
            Self::Plural { msgid, msgid_plural, .. } => MessageKey::Plural {
                msgid: msgid.as_str(),
                msgid_plural: msgid_plural.as_str(),
            },
            Self::ContextualPlural { msgctxt, msgid, msgid_plural, .. } => {
                MessageKey::ContextualPlural {
                    msgctxt: msgctxt.as_str(),
                    msgid: msgid.as_str(),
                    msgid_plural: msgid_plural.as_str(),
                }
            }
        }
    }

    /// Structural variant of this message.
    #[must_use]
    pub const fn shape(&self) -> MessageShape {
        match self {
            Self::Singular { .. } => MessageShape::Singular,
            Self::Contextual { .. } => MessageShape::Contextual,
            Self::Plural { .. } => MessageShape::Plural,
            Self::ContextualPlural { .. } => MessageShape::ContextualPlural,
        }
    }

    /// Translation of a singular-shaped message, `None` for plural shapes.
    #[must_use]
    pub fn msgstr(&self) -> Option<&str> {
        match self {
            Self::Singular { msgstr, .. } | Self::Contextual { msgstr, .. } => Some(msgstr.as_str()),
            Self::Plural { .. } | Self::ContextualPlural { .. } => None,
        }
    }

    /// Indexed translations of a plural-shaped message, `None` for singular shapes.
    #[must_use]
    pub const fn msgstr_plural(&self) -> Option<&BTreeMap<u32, String>> {
        match self {
            Self::Plural { msgstr, .. } | Self::ContextualPlural { msgstr, .. } => Some(msgstr),
            Self::Singular { .. } | Self::Contextual { .. } => None,
        }
    }

    /// Returns true if at least one translation string is non-empty.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        match self {
            Self::Singular { msgstr, .. } | Self::Contextual { msgstr, .. } => !msgstr.is_empty(),
            Self::Plural { msgstr, .. } | Self::ContextualPlural { msgstr, .. } => {
                msgstr.values().any(|value| !value.is_empty())
            }
        }
    }
}

/// A parsed catalog entry: a message plus its translator comments and flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationRecord {
    /// Identifying fields and translations
    pub message: Message,

    /// Free-form annotations (`# ...` lines)
    #[serde(default)]
    pub comments: Vec<String>,

    /// Marker tags (`#, ...` line), e.g. `fuzzy` or `python-format`
    #[serde(default)]
    pub flags: BTreeSet<String>,
}

impl TranslationRecord {
    /// Creates a record without comments or flags.
    #[must_use]
    pub const fn new(message: Message) -> Self {
        Self { message, comments: Vec::new(), flags: BTreeSet::new() }
    }

    /// Creates a record without context or plural form.
    #[must_use]
    pub fn singular(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Self::new(Message::Singular { msgid: msgid.into(), msgstr: msgstr.into() })
    }

    /// Creates a record under a context label.
    #[must_use]
    pub fn contextual(
        msgctxt: impl Into<String>,
        msgid: impl Into<String>,
        msgstr: impl Into<String>,
    ) -> Self {
        Self::new(Message::Contextual {
            msgctxt: msgctxt.into(),
            msgid: msgid.into(),
            msgstr: msgstr.into(),
        })
    }

    /// Creates a plural record; translations are numbered from plural index 0.
    #[must_use]
    pub fn plural<S: Into<String>>(
        msgid: impl Into<String>,
        msgid_plural: impl Into<String>,
        msgstr: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(Message::Plural {
            msgid: msgid.into(),
            msgid_plural: msgid_plural.into(),
            msgstr: indexed(msgstr),
        })
    }

    /// Creates a contextual plural record; translations are numbered from plural index 0.
    #[must_use]
    pub fn contextual_plural<S: Into<String>>(
        msgctxt: impl Into<String>,
        msgid: impl Into<String>,
        msgid_plural: impl Into<String>,
        msgstr: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(Message::ContextualPlural {
            msgctxt: msgctxt.into(),
            msgid: msgid.into(),
            msgid_plural: msgid_plural.into(),
            msgstr: indexed(msgstr),
        })
    }

    /// Replaces the comments.
    #[must_use]
    pub fn with_comments<S: Into<String>>(mut self, comments: impl IntoIterator<Item = S>) -> Self {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the flags.
    #[must_use]
    pub fn with_flags<S: Into<String>>(mut self, flags: impl IntoIterator<Item = S>) -> Self {
        self.flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Borrows the identifying fields.
    #[must_use]
    pub fn key(&self) -> MessageKey<'_> {
        self.message.key()
    }

    /// Structural variant of the message.
    #[must_use]
    pub const fn shape(&self) -> MessageShape {
        self.message.shape()
    }

    /// Primary source text.
    #[must_use]
    pub fn msgid(&self) -> &str {
        self.key().msgid()
    }

    /// Context label, if any.
    #[must_use]
    pub fn msgctxt(&self) -> Option<&str> {
        self.key().msgctxt()
    }

    /// Plural source text, if any.
    #[must_use]
    pub fn msgid_plural(&self) -> Option<&str> {
        self.key().msgid_plural()
    }

    /// Returns true for plural-shaped records.
    #[must_use]
    pub const fn is_plural(&self) -> bool {
        self.shape().is_plural()
    }

    /// Returns true if the record carries the `fuzzy` flag.
    #[must_use]
    pub fn is_fuzzy(&self) -> bool {
        self.flags.contains(FUZZY_FLAG)
    }

    /// Returns true if any translation string is non-empty.
    #[must_use]
    pub fn is_translated(&self) -> bool {
        self.message.is_translated()
    }
}

impl From<Message> for TranslationRecord {
    fn from(message: Message) -> Self {
        Self::new(message)
    }
}

/// Numbers translations by plural index, starting at 0.
fn indexed<S: Into<String>>(msgstr: impl IntoIterator<Item = S>) -> BTreeMap<u32, String> {
    (0..).zip(msgstr.into_iter().map(Into::into)).collect()
}
