pub mod elasticsearch;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use log::info;

use crate::config::ClusterConfig;
use crate::error::Result;

/// Index lifecycle and document operations against one cluster endpoint.
///
/// Every method is a single request; an error means the cluster either
/// could not be reached or answered outside the operation's success set.
#[async_trait]
pub trait IndexClient: Send + Sync {
    /// Deletes every index on the cluster (`DELETE /*`).
    async fn delete_all_indices(&self) -> Result<()>;

    /// Deletes one index. A missing index is not an error.
    async fn drop_index(&self, index: &str) -> Result<()>;

    /// Creates an index, sending `mapping` verbatim as the request body.
    async fn create_index(&self, index: &str, mapping: Vec<u8>) -> Result<()>;

    /// Creates a document under `id`. Fails if the id is already taken.
    async fn insert_document(&self, index: &str, id: &str, body: Vec<u8>) -> Result<()>;

    async fn get_mapping(&self, index: &str) -> Result<Value>;

    async fn count_documents(&self, index: &str) -> Result<u64>;
}

pub fn create_index_client(config: &ClusterConfig) -> Result<Arc<dyn IndexClient>> {
    info!("Creating index client for cluster at {}", config.url);
    let client = elasticsearch::ElasticsearchClient::new(&config.url)?;
    Ok(Arc::new(client))
}
