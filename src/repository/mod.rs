//! Repository layer over the document store

pub mod catalog;
pub mod memory;
pub mod postgres;
pub mod store;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Collection, Entity},
};

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use store::{Document, DocumentStore, Filter, FindQuery};

/// Main repository struct holding the store handle
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

fn decode<T: DeserializeOwned>(document: Document) -> AppResult<T> {
    Ok(serde_json::from_value(document.body)?)
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    /// All documents of a type, in list-page order
    pub async fn list<T: Entity>(&self) -> AppResult<Vec<T>> {
        let mut query = FindQuery::new();
        if let Some(key) = T::SORT_KEY {
            query = query.sort_by(key);
        }
        self.find(&query).await
    }

    pub async fn find<T: Entity>(&self, query: &FindQuery) -> AppResult<Vec<T>> {
        self.find_as(T::COLLECTION, query).await
    }

    /// Query a collection into any shape, typically a projection
    pub async fn find_as<T: DeserializeOwned>(
        &self,
        collection: Collection,
        query: &FindQuery,
    ) -> AppResult<Vec<T>> {
        self.store
            .find_all(collection, query)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub async fn find_one<T: Entity>(&self, query: &FindQuery) -> AppResult<Option<T>> {
        Ok(self.find::<T>(query).await?.into_iter().next())
    }

    pub async fn find_by_id<T: Entity>(&self, id: Uuid) -> AppResult<Option<T>> {
        self.store
            .find_by_id(T::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Like [`Repository::find_by_id`], but a missing document is a 404
    pub async fn get<T: Entity>(&self, id: Uuid) -> AppResult<T> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(T::NOT_FOUND.to_string()))
    }

    pub async fn exists(&self, collection: Collection, id: Uuid) -> AppResult<bool> {
        Ok(self.store.find_by_id(collection, id).await?.is_some())
    }

    pub async fn count(&self, collection: Collection, filters: &[Filter]) -> AppResult<u64> {
        self.store.count(collection, filters).await
    }

    /// Persist a new document
    pub async fn save<T: Entity>(&self, entity: &T) -> AppResult<()> {
        let body = serde_json::to_value(entity)?;
        self.store.save(T::COLLECTION, entity.id(), body).await?;
        tracing::info!("Saved {} {}", T::COLLECTION, entity.id());
        Ok(())
    }

    /// Replace an existing document, keeping its id
    pub async fn update<T: Entity>(&self, entity: &T) -> AppResult<()> {
        let body = serde_json::to_value(entity)?;
        if !self.store.update_by_id(T::COLLECTION, entity.id(), body).await? {
            return Err(AppError::NotFound(T::NOT_FOUND.to_string()));
        }
        tracing::info!("Updated {} {}", T::COLLECTION, entity.id());
        Ok(())
    }

    /// Delete by id; `false` when it was already gone
    pub async fn delete<T: Entity>(&self, id: Uuid) -> AppResult<bool> {
        let deleted = self.store.delete_by_id(T::COLLECTION, id).await?;
        if deleted {
            tracing::info!("Deleted {} {}", T::COLLECTION, id);
        }
        Ok(deleted)
    }
}
