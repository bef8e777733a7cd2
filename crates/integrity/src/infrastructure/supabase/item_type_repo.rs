//! Item type repository over the hosted store.

use async_trait::async_trait;
use armory_domain::ItemType;
use reqwest::{Method, RequestBuilder};

use super::client::SupabaseClient;
use crate::infrastructure::ports::{ItemTypeRepo, RepoError};

const TABLE: &str = "item_types";
const COLUMNS: &str = "id,name,base_image_url";

pub struct SupabaseItemTypeRepo {
    client: SupabaseClient,
}

impl SupabaseItemTypeRepo {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    fn list_request(&self) -> RequestBuilder {
        self.client
            .request(Method::GET, TABLE)
            .query(&[("select", COLUMNS), ("order", "name.asc")])
    }
}

#[async_trait]
impl ItemTypeRepo for SupabaseItemTypeRepo {
    async fn list_ordered_by_name(&self) -> Result<Vec<ItemType>, RepoError> {
        const OPERATION: &str = "list_item_types";

        let response = self.client.send(OPERATION, self.list_request()).await?;
        let rows: Vec<ItemType> = SupabaseClient::decode(OPERATION, response).await?;

        tracing::debug!(count = rows.len(), "Fetched item types");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_selects_columns_ordered_by_name() {
        let repo = SupabaseItemTypeRepo::new(SupabaseClient::new("https://abc.supabase.co", "k"));
        let request = repo.list_request().build().unwrap();

        assert_eq!(*request.method(), Method::GET);
        assert_eq!(request.url().path(), "/rest/v1/item_types");
        let query: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            query,
            vec![
                ("select".to_string(), "id,name,base_image_url".to_string()),
                ("order".to_string(), "name.asc".to_string()),
            ]
        );
    }
}
