//! Item repository over the hosted store.

use async_trait::async_trait;
use armory_domain::{Item, ItemId, NewItem};
use reqwest::{Method, RequestBuilder};

use super::client::SupabaseClient;
use crate::infrastructure::ports::{ItemRepo, RepoError};

const TABLE: &str = "items";

pub struct SupabaseItemRepo {
    client: SupabaseClient,
}

impl SupabaseItemRepo {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn insert_request(&self, item: &NewItem) -> RequestBuilder {
        self.client
            .request(Method::POST, TABLE)
            .header("Prefer", "return=representation")
            .json(item)
    }

    fn delete_request(&self, id: ItemId) -> RequestBuilder {
        self.client
            .request(Method::DELETE, TABLE)
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{}", id))])
    }
}

#[async_trait]
impl ItemRepo for SupabaseItemRepo {
    async fn insert(&self, item: &NewItem) -> Result<Item, RepoError> {
        const OPERATION: &str = "insert_item";

        let response = self.client.send(OPERATION, self.insert_request(item)).await?;
        let rows: Vec<Item> = SupabaseClient::decode(OPERATION, response).await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| RepoError::serialization("insert_item: store returned no rows"))
    }

    async fn delete(&self, id: ItemId) -> Result<(), RepoError> {
        const OPERATION: &str = "delete_item";

        let response = self.client.send(OPERATION, self.delete_request(id)).await?;
        let rows: Vec<serde_json::Value> = SupabaseClient::decode(OPERATION, response).await?;

        if rows.is_empty() {
            return Err(RepoError::not_found("Item", id));
        }
        Ok(())
    }
}
