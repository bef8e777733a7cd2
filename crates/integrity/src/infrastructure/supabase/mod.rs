//! Hosted store adapters.

mod client;
mod item_repo;
mod item_type_repo;

use std::sync::Arc;

pub use client::{SupabaseClient, DEFAULT_TIMEOUT_SECS};
pub use item_repo::SupabaseItemRepo;
pub use item_type_repo::SupabaseItemTypeRepo;

use crate::infrastructure::ports::{ItemRepo, ItemTypeRepo};

/// All store-backed repositories, sharing one HTTP client.
pub struct SupabaseRepositories {
    pub item_types: Arc<dyn ItemTypeRepo>,
    pub items: Arc<dyn ItemRepo>,
}

impl SupabaseRepositories {
    pub fn new(client: SupabaseClient) -> Self {
        Self {
            item_types: Arc::new(SupabaseItemTypeRepo::new(client.clone())),
            items: Arc::new(SupabaseItemRepo::new(client)),
        }
    }
}
