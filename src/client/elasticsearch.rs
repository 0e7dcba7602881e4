use async_trait::async_trait;
use reqwest::{ Client, Method, Response, StatusCode };
use reqwest::header::{ ACCEPT, CONTENT_TYPE };
use serde::Deserialize;
use serde_json::Value;
use log::{ info, error, debug };

use super::IndexClient;
use crate::error::{ FixtureError, Result };

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

/// Talks to an Elasticsearch (or OpenSearch) node over its REST API.
pub struct ElasticsearchClient {
    client: Client,
    host: String,
}

impl ElasticsearchClient {
    pub fn new(host: &str) -> Result<Self> {
        info!("Initializing Elasticsearch client for host: {}", host);
        let client = Client::builder().no_proxy().build()?;
        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.host, path)
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>
    ) -> reqwest::RequestBuilder {
        let mut request_builder = self.client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");

        if let Some(b) = body {
            request_builder = request_builder.header(CONTENT_TYPE, "application/json").body(b);
        }

        request_builder
    }

    async fn send(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        accepted: &[StatusCode]
    ) -> Result<String> {
        debug!("{} /{} ({})", method, path, operation);
        let response = self.build_request(method, path, body).send().await?;
        check_response(operation, response, accepted).await
    }
}

/// Drains the body and fails unless the status is one of `accepted`.
async fn check_response(
    operation: &str,
    response: Response,
    accepted: &[StatusCode]
) -> Result<String> {
    let status = response.status();
    let text = response.text().await?;

    if !accepted.contains(&status) {
        error!("Failed to {} (Status: {}): {}", operation, status, text);
        return Err(FixtureError::unexpected_status(operation, status, text));
    }

    Ok(text)
}

#[async_trait]
impl IndexClient for ElasticsearchClient {
    async fn delete_all_indices(&self) -> Result<()> {
        self.send("delete all indices", Method::DELETE, "*", None, &[StatusCode::OK]).await?;
        Ok(())
    }

    async fn drop_index(&self, index: &str) -> Result<()> {
        self.send(
            &format!("delete index {}", index),
            Method::DELETE,
            index,
            None,
            &[StatusCode::OK, StatusCode::NOT_FOUND]
        ).await?;
        Ok(())
    }

    async fn create_index(&self, index: &str, mapping: Vec<u8>) -> Result<()> {
        self.send(
            &format!("set mapping for index {}", index),
            Method::PUT,
            index,
            Some(mapping),
            &[StatusCode::OK]
        ).await?;
        Ok(())
    }

    async fn insert_document(&self, index: &str, id: &str, body: Vec<u8>) -> Result<()> {
        self.send(
            &format!("index document {} into {}", id, index),
            Method::POST,
            &format!("{}/_doc/{}", index, id),
            Some(body),
            &[StatusCode::CREATED]
        ).await?;
        Ok(())
    }

    async fn get_mapping(&self, index: &str) -> Result<Value> {
        let text = self.send(
            &format!("get mapping of index {}", index),
            Method::GET,
            &format!("{}/_mapping", index),
            None,
            &[StatusCode::OK]
        ).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn count_documents(&self, index: &str) -> Result<u64> {
        let text = self.send(
            &format!("count documents in {}", index),
            Method::GET,
            &format!("{}/_count", index),
            None,
            &[StatusCode::OK]
        ).await?;
        let response: CountResponse = serde_json::from_str(&text)?;
        debug!("Count for index '{}': {}", index, response.count);
        Ok(response.count)
    }
}
