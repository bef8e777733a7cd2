//! Pure per-record checks over a fetched item type catalog.

use armory_domain::{image_naming, BucketPrefix, ItemType};

use super::types::{
    CompletenessResult, NamingMismatch, PatternMismatch, PropagationGate, PropagationOutcome,
};

/// Partition item types into those with and without a base image URL.
pub fn check_completeness(item_types: &[ItemType]) -> CompletenessResult {
    let (with_image, missing): (Vec<&ItemType>, Vec<&ItemType>) =
        item_types.iter().partition(|t| t.has_base_image());

    CompletenessResult {
        with_image: with_image.len(),
        missing: missing.into_iter().map(|t| t.name.clone()).collect(),
    }
}

/// Base image URLs that do not live under `prefix`. Types without a URL are
/// not evaluated.
pub fn check_pattern(item_types: &[ItemType], prefix: &BucketPrefix) -> Vec<PatternMismatch> {
    item_types
        .iter()
        .filter_map(|t| {
            let url = t.base_image_url.as_deref()?;
            (!prefix.contains(url)).then(|| PatternMismatch {
                item_type: t.name.clone(),
                url: url.to_string(),
            })
        })
        .collect()
}

/// Base image URLs whose filename differs from the slug of the type name.
/// Types without a URL are not evaluated.
pub fn check_naming(item_types: &[ItemType]) -> Vec<NamingMismatch> {
    item_types
        .iter()
        .filter_map(|t| {
            let url = t.base_image_url.as_deref()?;
            let expected = t.expected_image_filename();
            let actual = image_naming::final_path_segment(url);
            (actual != expected).then(|| NamingMismatch {
                item_type: t.name.clone(),
                expected,
                actual: actual.to_string(),
            })
        })
        .collect()
}

/// Template for the propagation check: the type named `reference`, else the
/// first fetched type.
pub fn select_template<'a>(item_types: &'a [ItemType], reference: &str) -> Option<&'a ItemType> {
    item_types
        .iter()
        .find(|t| t.name == reference)
        .or_else(|| item_types.first())
}

/// Overall verdict. Completeness, pattern and naming always gate; the
/// propagation outcome gates only under [`PropagationGate::Required`] and
/// only when it actually failed.
pub fn overall_passed(
    missing_count: usize,
    pattern_error_count: usize,
    naming_error_count: usize,
    propagation: &PropagationOutcome,
    gate: PropagationGate,
) -> bool {
    let catalog_ok = missing_count == 0 && pattern_error_count == 0 && naming_error_count == 0;
    match gate {
        PropagationGate::Advisory => catalog_ok,
        PropagationGate::Required => catalog_ok && !propagation.is_failed(),
    }
}
