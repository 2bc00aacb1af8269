//! Identifying keys of catalog messages.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Structural variant of a catalog message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageShape {
    /// `msgid` + `msgstr`
    Singular,
    /// `msgctxt` + `msgid` + `msgstr`
    Contextual,
    /// `msgid` + `msgid_plural` + `msgstr[n]`
    Plural,
    /// `msgctxt` + `msgid` + `msgid_plural` + `msgstr[n]`
    ContextualPlural,
}

impl MessageShape {
    /// All four shapes, in declaration order.
    pub const ALL: [Self; 4] =
        [Self::Singular, Self::Contextual, Self::Plural, Self::ContextualPlural];

    /// Returns true if messages of this shape carry `msgid_plural` and indexed translations.
    #[must_use]
    pub const fn is_plural(self) -> bool {
        matches!(self, Self::Plural | Self::ContextualPlural)
    }

    /// Returns true if messages of this shape carry a `msgctxt`.
    #[must_use]
    pub const fn has_context(self) -> bool {
        matches!(self, Self::Contextual | Self::ContextualPlural)
    }
}

/// Borrowed view of the fields that identify a message within a catalog.
///
/// Translated content, comments and flags are not part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey<'a> {
    /// A message identified by its `msgid` alone.
    Singular {
        /// Source text
        msgid: &'a str,
    },
    /// A message disambiguated by a context label.
    Contextual {
        /// Context label
        msgctxt: &'a str,
        /// Source text
        msgid: &'a str,
    },
    /// A message with a plural source form.
    Plural {
        /// Singular source text
        msgid: &'a str,
        /// Plural source text
        msgid_plural: &'a str,
    },
    /// A plural message disambiguated by a context label.
    ContextualPlural {
        /// Context label
        msgctxt: &'a str,
        /// Singular source text
        msgid: &'a str,
        /// Plural source text
        msgid_plural: &'a str,
    },
}

impl<'a> MessageKey<'a> {
    /// Primary identifying text, whatever the shape.
    ///
    /// For plural keys this is the singular form; `msgid_plural` is never returned.
    #[must_use]
    pub const fn msgid(&self) -> &'a str {
        match self {
            Self::Singular { msgid }
            | Self::Contextual { msgid, .. }
            | Self::Plural { msgid, .. }
            | Self::ContextualPlural { msgid, .. } => *msgid,
        }
    }

    /// Context label, if the key has one.
    #[must_use]
    pub const fn msgctxt(&self) -> Option<&'a str> {
        match self {
            Self::Contextual { msgctxt, .. } | Self::ContextualPlural { msgctxt, .. } => {
                Some(*msgctxt)
            }
            Self::Singular { .. } | Self::Plural { .. } => None,
        }
    }

    /// Plural source text, if the key has one.
    #[must_use]
    pub const fn msgid_plural(&self) -> Option<&'a str> {
        match self {
            Self::Plural { msgid_plural, .. } | Self::ContextualPlural { msgid_plural, .. } => {
                Some(*msgid_plural)
            }
            Self::Singular { .. } | Self::Contextual { .. } => None,
        }
    }

    /// Structural variant of the key.
    #[must_use]
    pub const fn shape(&self) -> MessageShape {
        match self {
            Self::Singular { .. } => MessageShape::Singular,
            Self::Contextual { .. } => MessageShape::Contextual,
            Self::Plural { .. } => MessageShape::Plural,
            Self::ContextualPlural { .. } => MessageShape::ContextualPlural,
        }
    }
}

impl fmt::Display for MessageKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msgctxt) = self.msgctxt() {
            write!(f, "[{msgctxt}] ")?;
        }
        write!(f, "{}", self.msgid())?;
        if let Some(msgid_plural) = self.msgid_plural() {
            write!(f, " / {msgid_plural}")?;
        }
        Ok(())
    }
}
