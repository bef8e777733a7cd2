//! Test fixtures and common test helpers.

pub mod memory_store;

use armory_domain::ItemType;

/// Bucket prefix used throughout the fixtures.
pub const BUCKET_PREFIX: &str = "https://pub-abc123.r2.dev/items/";

/// Item types by the names the scenarios refer to.
pub mod item_types {
    use super::*;

    /// Correct bucket, correct filename.
    pub fn sword() -> ItemType {
        ItemType::new("Sword").with_base_image_url(format!("{BUCKET_PREFIX}sword.png"))
    }

    /// Correct bucket, correct filename, two-word name.
    pub fn iron_helm() -> ItemType {
        ItemType::new("Iron Helm").with_base_image_url(format!("{BUCKET_PREFIX}iron_helm.png"))
    }

    /// Correct bucket, filename missing the underscore.
    pub fn iron_helm_misnamed() -> ItemType {
        ItemType::new("Iron Helm").with_base_image_url(format!("{BUCKET_PREFIX}ironhelm.png"))
    }

    /// Foreign bucket, correct filename.
    pub fn bow_in_other_bucket() -> ItemType {
        ItemType::new("Bow").with_base_image_url("https://pub-other.r2.dev/items/bow.png")
    }

    /// No base image at all.
    pub fn shield_without_image() -> ItemType {
        ItemType::new("Shield")
    }
}
