//! In-process document store, used by tests and `backend = "memory"` runs

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{
    compare_field, project, Document, DocumentStore, Filter, FindQuery,
};
use crate::{error::AppResult, models::Collection};

/// Documents per collection, in insertion order
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<Collection, IndexMap<Uuid, Value>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_all(&self, collection: Collection, query: &FindQuery) -> AppResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let mut documents: Vec<Document> = collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, body)| query.matches(body))
                    .map(|(id, body)| Document {
                        id: *id,
                        body: body.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        if let Some(field) = query.sort {
            // stable sort keeps insertion order among equal keys
            documents.sort_by(|a, b| compare_field(&a.body, &b.body, field));
        }

        if let Some(fields) = query.projection {
            for document in documents.iter_mut() {
                document.body = project(std::mem::take(&mut document.body), fields);
            }
        }
        Ok(documents)
    }

    async fn find_by_id(&self, collection: Collection, id: Uuid) -> AppResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.get(&id))
            .map(|body| Document {
                id,
                body: body.clone(),
            }))
    }

    async fn count(&self, collection: Collection, filters: &[Filter]) -> AppResult<u64> {
        let collections = self.collections.read().await;
        let count = collections
            .get(&collection)
            .map(|docs| {
                docs.values()
                    .filter(|body| filters.iter().all(|f| f.matches(body)))
                    .count()
            })
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn save(&self, collection: Collection, id: Uuid, body: Value) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().insert(id, body);
        Ok(())
    }

    async fn update_by_id(&self, collection: Collection, id: Uuid, body: Value) -> AppResult<bool> {
        let mut collections = self.collections.write().await;
        match collections.get_mut(&collection).and_then(|docs| docs.get_mut(&id)) {
            Some(existing) => {
                *existing = body;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, collection: Collection, id: Uuid) -> AppResult<bool> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(&collection)
            .and_then(|docs| docs.shift_remove(&id))
            .is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
