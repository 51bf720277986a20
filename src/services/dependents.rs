//! Documents that block deleting the document they reference

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, Book, BookInstance, BookSummary, Entity, Genre},
    repository::Repository,
};

#[async_trait]
pub trait HasDependents: Entity {
    type Dependent: Send + Sync;

    /// Documents referencing `id`; while any exist, `id` cannot be deleted
    async fn dependents(repository: &Repository, id: Uuid) -> AppResult<Vec<Self::Dependent>>;
}

#[async_trait]
impl HasDependents for Author {
    type Dependent = BookSummary;

    async fn dependents(repository: &Repository, id: Uuid) -> AppResult<Vec<BookSummary>> {
        repository.books_by_author(id).await
    }
}

#[async_trait]
impl HasDependents for Genre {
    type Dependent = Book;

    async fn dependents(repository: &Repository, id: Uuid) -> AppResult<Vec<Book>> {
        repository.books_by_genre(id).await
    }
}

#[async_trait]
impl HasDependents for Book {
    type Dependent = BookInstance;

    async fn dependents(repository: &Repository, id: Uuid) -> AppResult<Vec<BookInstance>> {
        repository.instances_of_book(id).await
    }
}

#[async_trait]
impl HasDependents for BookInstance {
    type Dependent = ();

    async fn dependents(_repository: &Repository, _id: Uuid) -> AppResult<Vec<()>> {
        Ok(Vec::new())
    }
}
