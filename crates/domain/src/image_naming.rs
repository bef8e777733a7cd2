//! Image naming convention for item type artwork.
//!
//! Every base image is stored under a filename derived from the item type's
//! display name, so the expected filename can be predicted without touching
//! the bucket.

use std::sync::LazyLock;

use regex::Regex;

/// Extension of every generated base image.
pub const IMAGE_EXTENSION: &str = ".png";

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_SLUG_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_]").expect("valid regex"));

/// Derive the slug for a display name.
///
/// Lower-cases the name, collapses each run of Unicode whitespace into a
/// single `_` and drops anything outside `[a-z0-9_]`. Whitespace runs at the edges are
/// kept as underscores, not trimmed.
///
/// # Examples
///
/// ```
/// use armory_domain::image_naming::slug;
///
/// assert_eq!(slug("Iron Helm"), "iron_helm");
/// assert_eq!(slug("Potion of Healing (Greater)"), "potion_of_healing_greater");
/// ```
pub fn slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let underscored = WHITESPACE_RUN_RE.replace_all(&lowered, "_");
    NON_SLUG_CHAR_RE.replace_all(&underscored, "").into_owned()
}

/// Filename a base image for `name` is expected to have.
pub fn expected_filename(name: &str) -> String {
    format!("{}{}", slug(name), IMAGE_EXTENSION)
}

/// Last path segment of an image URL, ignoring query string and fragment.
///
/// Returns the whole input when it contains no `/`.
pub fn final_path_segment(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    path.rsplit('/').next().unwrap_or(path)
}
