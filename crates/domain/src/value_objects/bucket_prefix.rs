use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

// ============================================================================
// BucketPrefix
// ============================================================================

/// Public URL prefix every stored item image lives under
/// (e.g. `https://pub-<id>.r2.dev/items/`).
///
/// Validated on construction: non-empty after trimming and an `http(s)://`
/// URL. The prefix is matched literally, so no trailing slash is added.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BucketPrefix(String);

impl BucketPrefix {
    /// Create a new validated bucket prefix.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the prefix is empty after
    /// trimming or does not start with `http://` or `https://`.
    pub fn new(prefix: impl Into<String>) -> Result<Self, DomainError> {
        let prefix = prefix.into();
        let trimmed = prefix.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Bucket prefix cannot be empty"));
        }
        if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(DomainError::validation(format!(
                "Bucket prefix must be an http(s) URL, got '{}'",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `url` lives under this prefix.
    pub fn contains(&self, url: &str) -> bool {
        url.starts_with(&self.0)
    }
}

impl fmt::Display for BucketPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BucketPrefix {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BucketPrefix> for String {
    fn from(prefix: BucketPrefix) -> String {
        prefix.0
    }
}

impl AsRef<str> for BucketPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
