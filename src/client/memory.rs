use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::{ BTreeMap, HashMap };
use std::sync::Mutex;

use super::IndexClient;
use crate::error::{ FixtureError, Result };

#[derive(Debug, Default)]
struct StoredIndex {
    mapping: Vec<u8>,
    documents: BTreeMap<String, Vec<u8>>,
}

#[derive(Debug, Default)]
struct State {
    indices: HashMap<String, StoredIndex>,
    calls: Vec<String>,
}

/// In-process stand-in for a cluster, enforcing the same status rules as the real one.
#[derive(Debug, Default)]
pub(crate) struct MemoryIndexClient {
    state: Mutex<State>,
}

impl MemoryIndexClient {
    pub(crate) fn with_indices(names: &[&str]) -> Self {
        let client = Self::default();
        {
            let mut state = client.state.lock().unwrap();
            for name in names {
                state.indices.insert(name.to_string(), StoredIndex::default());
            }
        }
        client
    }

    pub(crate) fn seed_document(&self, index: &str, id: &str, body: &[u8]) {
        let mut state = self.state.lock().unwrap();
        state.indices
            .entry(index.to_string())
            .or_default()
            .documents.insert(id.to_string(), body.to_vec());
    }

    /// Requests seen so far, as `METHOD /path` lines.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn index_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.state.lock().unwrap().indices.keys().cloned().collect();
        names.sort();
        names
    }

    pub(crate) fn document_ids(&self, index: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .indices.get(index)
            .map(|i| i.documents.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn document(&self, index: &str, id: &str) -> Option<Vec<u8>> {
        self.state
            .lock()
            .unwrap()
            .indices.get(index)
            .and_then(|i| i.documents.get(id).cloned())
    }

    fn record(&self, call: String) -> std::sync::MutexGuard<'_, State> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

fn missing_index(operation: &str, index: &str) -> FixtureError {
    FixtureError::unexpected_status(
        operation,
        StatusCode::NOT_FOUND,
        format!(r#"{{"error":{{"type":"index_not_found_exception","index":"{}"}}}}"#, index)
    )
}

#[async_trait]
impl IndexClient for MemoryIndexClient {
    async fn delete_all_indices(&self) -> Result<()> {
        let mut state = self.record("DELETE /*".to_string());
        state.indices.clear();
        Ok(())
    }

    async fn drop_index(&self, index: &str) -> Result<()> {
        let mut state = self.record(format!("DELETE /{}", index));
        state.indices.remove(index);
        Ok(())
    }

    async fn create_index(&self, index: &str, mapping: Vec<u8>) -> Result<()> {
        let mut state = self.record(format!("PUT /{}", index));
        if state.indices.contains_key(index) {
            return Err(
                FixtureError::unexpected_status(
                    format!("set mapping for index {}", index),
                    StatusCode::BAD_REQUEST,
                    r#"{"error":{"type":"resource_already_exists_exception"}}"#
                )
            );
        }
        state.indices.insert(index.to_string(), StoredIndex {
            mapping,
            documents: BTreeMap::new(),
        });
        Ok(())
    }

    async fn insert_document(&self, index: &str, id: &str, body: Vec<u8>) -> Result<()> {
        let mut state = self.record(format!("POST /{}/_doc/{}", index, id));
        let stored = state.indices.entry(index.to_string()).or_default();
        if stored.documents.contains_key(id) {
            return Err(
                FixtureError::unexpected_status(
                    format!("index document {} into {}", id, index),
                    StatusCode::CONFLICT,
                    r#"{"error":{"type":"version_conflict_engine_exception"}}"#
                )
            );
        }
        stored.documents.insert(id.to_string(), body);
        Ok(())
    }

    async fn get_mapping(&self, index: &str) -> Result<Value> {
        let state = self.record(format!("GET /{}/_mapping", index));
        let stored = state.indices
            .get(index)
            .ok_or_else(|| missing_index(&format!("get mapping of index {}", index), index))?;
        let mut body: Value = serde_json::from_slice(&stored.mapping)?;
        let mappings = body
            .get_mut("mappings")
            .map(Value::take)
            .unwrap_or_else(|| serde_json::json!({}));
        let mut response = serde_json::Map::new();
        response.insert(index.to_string(), serde_json::json!({ "mappings": mappings }));
        Ok(Value::Object(response))
    }

    async fn count_documents(&self, index: &str) -> Result<u64> {
        let state = self.record(format!("GET /{}/_count", index));
        state.indices
            .get(index)
            .map(|i| i.documents.len() as u64)
            .ok_or_else(|| missing_index(&format!("count documents in {}", index), index))
    }
}
