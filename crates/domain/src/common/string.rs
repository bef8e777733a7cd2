//! String normalization for nullable text columns.
//!
//! Hosted tables are not consistent about "no value": some rows carry
//! `null`, some carry `""` or only whitespace. All of those read as `None`
//! through these helpers; real values are never rewritten.

use serde::{Deserialize, Deserializer};

/// Maps blank (empty or whitespace-only) column values to `None`.
///
/// Non-blank values pass through untouched, surrounding whitespace included,
/// so checks see exactly what is stored.
///
/// # Examples
///
/// ```
/// use armory_domain::common::blank_to_none;
///
/// assert_eq!(blank_to_none(Some(" a.png ".into())), Some(" a.png ".into()));
/// assert_eq!(blank_to_none(Some("   ".into())), None);
/// assert_eq!(blank_to_none(None), None);
/// ```
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Serde adapter for nullable text columns, see [`blank_to_none`].
pub fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(blank_to_none)
}
