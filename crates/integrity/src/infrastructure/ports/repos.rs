//! Repository port traits for data store access.

use async_trait::async_trait;
use armory_domain::{Item, ItemId, ItemType, NewItem};

use super::error::RepoError;

// =============================================================================
// Catalog (read-only)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemTypeRepo: Send + Sync {
    /// Every item type, ordered by name ascending.
    async fn list_ordered_by_name(&self) -> Result<Vec<ItemType>, RepoError>;
}

// =============================================================================
// Items
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepo: Send + Sync {
    /// Insert one item and return the row as stored.
    async fn insert(&self, item: &NewItem) -> Result<Item, RepoError>;
    async fn delete(&self, id: ItemId) -> Result<(), RepoError>;
}
