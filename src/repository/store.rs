//! Document store abstraction.
//!
//! A store holds schemaless JSON documents grouped by [`Collection`], each
//! keyed by a UUID. Queries are deliberately small: equality filters on
//! top-level fields, one sort key, and an optional projection.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{error::AppResult, models::Collection};

/// A stored document; `body` is the serialized entity
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub body: Value,
}

/// Equality on a top-level field. Array fields match when they contain the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: &'static str,
    pub value: Value,
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<Value>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    pub fn matches(&self, body: &Value) -> bool {
        match body.get(self.field) {
            Some(Value::Array(items)) => items.contains(&self.value),
            Some(value) => *value == self.value,
            None => false,
        }
    }
}

/// Parameters of a `find_all` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindQuery {
    pub filters: Vec<Filter>,
    /// Ascending sort key; ties keep insertion order
    pub sort: Option<&'static str>,
    pub projection: Option<&'static [&'static str]>,
}

impl FindQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::eq(field, value));
        self
    }

    pub fn sort_by(mut self, field: &'static str) -> Self {
        self.sort = Some(field);
        self
    }

    pub fn project(mut self, fields: &'static [&'static str]) -> Self {
        self.projection = Some(fields);
        self
    }

    pub fn matches(&self, body: &Value) -> bool {
        self.filters.iter().all(|f| f.matches(body))
    }
}

/// Keep only `fields` of a document body
pub fn project(body: Value, fields: &[&str]) -> Value {
    match body {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(k, _)| fields.contains(&k.as_str()))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}

/// Order two documents on a top-level field; missing values sort first
pub fn compare_field(a: &Value, b: &Value, field: &str) -> Ordering {
    match (a.get(field), b.get(field)) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
        (None, None) => Ordering::Equal,
    }
}

/// Persistence backend for catalog documents
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find_all(&self, collection: Collection, query: &FindQuery) -> AppResult<Vec<Document>>;

    async fn find_by_id(&self, collection: Collection, id: Uuid) -> AppResult<Option<Document>>;

    async fn count(&self, collection: Collection, filters: &[Filter]) -> AppResult<u64>;

    /// Insert a new document
    async fn save(&self, collection: Collection, id: Uuid, body: Value) -> AppResult<()>;

    /// Replace a document's body; `false` when no such document exists
    async fn update_by_id(&self, collection: Collection, id: Uuid, body: Value) -> AppResult<bool>;

    /// `false` when no such document exists
    async fn delete_by_id(&self, collection: Collection, id: Uuid) -> AppResult<bool>;

    /// Cheap connectivity check for the readiness endpoint
    async fn ping(&self) -> AppResult<()>;
}
