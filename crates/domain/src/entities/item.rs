//! Item entity - A concrete, user-owned instance of an item type
//!
//! Items start life with the base image of their type copied into
//! `image_url`; style-specific regeneration may replace it later.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ItemId, ItemType, ItemTypeId, UserId};

/// Stored item row.
///
/// Plain data: any combination of values is a valid row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub item_type_id: ItemTypeId,
    pub user_id: UserId,
    pub level: i32,
    /// Whether a style-specific image has been generated for this item
    pub is_styled: bool,
    /// Instance stats (JSON column)
    #[serde(default)]
    pub stats: Option<serde_json::Value>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for an item. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub item_type_id: ItemTypeId,
    pub user_id: UserId,
    pub level: i32,
    pub is_styled: bool,
    pub stats: Option<serde_json::Value>,
    pub material: Option<String>,
    pub image_url: Option<String>,
}

impl NewItem {
    /// A fresh level 1, unstyled item of `item_type` whose image is the
    /// type's base image.
    pub fn from_item_type(item_type: &ItemType, user_id: UserId) -> Self {
        Self {
            item_type_id: item_type.id,
            user_id,
            level: 1,
            is_styled: false,
            stats: None,
            material: None,
            image_url: item_type.base_image_url.clone(),
        }
    }

    /// Materialize the row the store would return for this payload.
    pub fn into_item(self, id: ItemId, created_at: Option<DateTime<Utc>>) -> Item {
        Item {
            id,
            item_type_id: self.item_type_id,
            user_id: self.user_id,
            level: self.level,
            is_styled: self.is_styled,
            stats: self.stats,
            material: self.material,
            image_url: self.image_url,
            created_at,
        }
    }
}
