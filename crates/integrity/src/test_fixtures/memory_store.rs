//! In-memory item store for testing.
//!
//! Implements both repository ports over plain collections so use case
//! tests can observe what a run left behind.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::memory_store::InMemoryStore;
//!
//! let store = Arc::new(InMemoryStore::new(vec![sword()]));
//! // ... run the use case with `store.clone()` as both repos
//! assert_eq!(store.item_count(), 0);
//! ```

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use armory_domain::{Item, ItemId, ItemType, NewItem};

use crate::infrastructure::ports::{ItemRepo, ItemTypeRepo, RepoError};

/// How the store treats writes.
#[derive(Debug, Clone, Default)]
pub enum WriteBehavior {
    /// Store rows as given.
    #[default]
    Faithful,
    /// Reject inserts, as a missing fixture user foreign key would.
    RejectInserts,
    /// Store rows with this image URL instead of the requested one.
    OverrideImage(Option<String>),
    /// Accept inserts, refuse deletes.
    RejectDeletes,
}

pub struct InMemoryStore {
    item_types: Vec<ItemType>,
    items: Mutex<HashMap<ItemId, Item>>,
    behavior: WriteBehavior,
    insert_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryStore {
    pub fn new(item_types: Vec<ItemType>) -> Self {
        Self::with_behavior(item_types, WriteBehavior::Faithful)
    }

    pub fn with_behavior(item_types: Vec<ItemType>, behavior: WriteBehavior) -> Self {
        Self {
            item_types,
            items: Mutex::new(HashMap::new()),
            behavior,
            insert_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Seed a pre-existing item row.
    pub fn seed_item(&self, item: Item) {
        self.lock().insert(item.id, item);
    }

    pub fn item_count(&self) -> usize {
        self.lock().len()
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::Relaxed)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::Relaxed)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<ItemId, Item>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ItemTypeRepo for InMemoryStore {
    async fn list_ordered_by_name(&self) -> Result<Vec<ItemType>, RepoError> {
        let mut rows = self.item_types.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

#[async_trait]
impl ItemRepo for InMemoryStore {
    async fn insert(&self, item: &NewItem) -> Result<Item, RepoError> {
        self.insert_calls.fetch_add(1, Ordering::Relaxed);

        let mut new_item = item.clone();
        match &self.behavior {
            WriteBehavior::RejectInserts => {
                return Err(RepoError::database(
                    "insert_item",
                    "HTTP 409: insert or update on table \"items\" violates foreign key constraint \"items_user_id_fkey\"",
                ));
            }
            WriteBehavior::OverrideImage(url) => new_item.image_url = url.clone(),
            WriteBehavior::Faithful | WriteBehavior::RejectDeletes => {}
        }

        let created_at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).single();
        let stored = new_item.into_item(ItemId::new(), created_at);
        self.lock().insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ItemId) -> Result<(), RepoError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);

        if matches!(self.behavior, WriteBehavior::RejectDeletes) {
            return Err(RepoError::database("delete_item", "HTTP 403: permission denied"));
        }
        match self.lock().remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::not_found("Item", id)),
        }
    }
}
