use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::fuzzy::{
    DEFAULT_THRESHOLD,
    Matcher,
};

/// A rejected field of [`MergeSettings`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid merge setting '{field_path}': {message}")]
pub struct ValidationError {
    /// Field name as written in the settings file (e.g., "threshold")
    pub field_path: String,
    /// What is wrong with the value
    pub message: String,
}

impl ValidationError {
    /// Creates an error for the given settings field.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Failure to obtain usable merge settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings were read but did not validate.
    #[error("Invalid merge settings:\n{}", list_fields(.0))]
    Invalid(Vec<ValidationError>),

    /// The settings file exists but could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        /// Settings file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The settings file is not a JSON object of merge settings.
    #[error("Cannot parse {}: {source}", path.display())]
    Parse {
        /// Settings file
        path: PathBuf,
        /// Underlying JSON failure
        source: serde_json::Error,
    },
}

/// One line per rejected field, numbered from 1.
fn list_fields(errors: &[ValidationError]) -> String {
    (1..)
        .zip(errors)
        .map(|(number, err)| format!("  {number}. {} - {}", err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for carrying translations over between catalog versions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeSettings {
    /// Try fuzzy matches for new entries that have no exact counterpart.
    /// When `false`, such entries start untranslated.
    pub fuzzy_matching: bool,

    /// Minimum similarity (inclusive) for an old entry to be carried over.
    /// Values outside `0.0..=1.0` are accepted and make matching all-or-nothing.
    pub threshold: f64,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self { fuzzy_matching: true, threshold: DEFAULT_THRESHOLD }
    }
}

impl MergeSettings {
    /// # Errors
    /// - Threshold is NaN or infinite
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !self.threshold.is_finite() {
            errors.push(ValidationError::new(
                "threshold",
                format!(
                    "The threshold must be a finite number, got {}. Example: {DEFAULT_THRESHOLD}",
                    self.threshold
                ),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Matcher for these settings, or `None` when fuzzy matching is turned off.
    #[must_use]
    pub const fn matcher(&self) -> Option<Matcher> {
        if self.fuzzy_matching { Some(Matcher::new(self.threshold)) } else { None }
    }
}
