//! Item type entity - Catalog definition of an equipment kind
//!
//! Item types are read-only from this workspace's point of view. The only
//! field the integrity checks care about is the canonical, unstyled base
//! image every new item of this type starts from.

use serde::{Deserialize, Serialize};

use crate::common::string::deserialize_optional_text;
use crate::image_naming;
use crate::ItemTypeId;

/// Catalog row for an equipment kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemType {
    pub id: ItemTypeId,
    pub name: String,
    /// Canonical unstyled image location. Blank values deserialize to `None`.
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub base_image_url: Option<String>,
}

impl ItemType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemTypeId::new(),
            name: name.into(),
            base_image_url: None,
        }
    }

    pub fn with_base_image_url(mut self, url: impl Into<String>) -> Self {
        self.base_image_url = Some(url.into());
        self
    }

    pub fn has_base_image(&self) -> bool {
        self.base_image_url.is_some()
    }

    /// Filename the base image is expected to carry, derived from `name`.
    pub fn expected_image_filename(&self) -> String {
        image_naming::expected_filename(&self.name)
    }
}
