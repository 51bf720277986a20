//! PostgreSQL document store: one JSONB row per document

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::store::{project, Document, DocumentStore, Filter, FindQuery};
use crate::{
    error::{AppError, AppResult},
    models::Collection,
};

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: Pool<Postgres>,
}

impl PgDocumentStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Apply embedded migrations (creates the `documents` table)
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Store(format!("Migration failed: {}", e)))
    }
}

/// Append `AND body -> $n @> $n+1` per filter. Containment matches both
/// scalars and membership in array fields.
fn push_filters(sql: &mut String, filters: &[Filter], mut idx: usize) -> usize {
    for _ in filters {
        sql.push_str(&format!(" AND body -> ${} @> ${}", idx, idx + 1));
        idx += 2;
    }
    idx
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find_all(&self, collection: Collection, query: &FindQuery) -> AppResult<Vec<Document>> {
        let mut sql = String::from("SELECT id, body FROM documents WHERE collection = $1");
        let idx = push_filters(&mut sql, &query.filters, 2);
        match query.sort {
            Some(_) => sql.push_str(&format!(" ORDER BY body ->> ${} ASC, created_at", idx)),
            None => sql.push_str(" ORDER BY created_at"),
        }

        let mut builder = sqlx::query_as::<_, (Uuid, Value)>(&sql).bind(collection.as_str());
        for filter in &query.filters {
            builder = builder.bind(filter.field).bind(&filter.value);
        }
        if let Some(field) = query.sort {
            builder = builder.bind(field);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|(id, body)| Document {
                id,
                body: match query.projection {
                    Some(fields) => project(body, fields),
                    None => body,
                },
            })
            .collect())
    }

    async fn find_by_id(&self, collection: Collection, id: Uuid) -> AppResult<Option<Document>> {
        let row = sqlx::query_as::<_, (Uuid, Value)>(
            "SELECT id, body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(id, body)| Document { id, body }))
    }

    async fn count(&self, collection: Collection, filters: &[Filter]) -> AppResult<u64> {
        let mut sql = String::from("SELECT COUNT(*) FROM documents WHERE collection = $1");
        push_filters(&mut sql, filters, 2);

        let mut builder = sqlx::query_scalar::<_, i64>(&sql).bind(collection.as_str());
        for filter in filters {
            builder = builder.bind(filter.field).bind(&filter.value);
        }
        let count = builder.fetch_one(&self.pool).await?;
        Ok(count.max(0) as u64)
    }

    async fn save(&self, collection: Collection, id: Uuid, body: Value) -> AppResult<()> {
        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection.as_str())
            .bind(id)
            .bind(body)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update_by_id(&self, collection: Collection, id: Uuid, body: Value) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE documents SET body = $3, updated_at = NOW() WHERE collection = $1 AND id = $2",
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(body)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, collection: Collection, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
