//! Catalog service: the validate-persist pipeline shared by every entity,
//! plus the few entity-specific reads the pages need.

use std::collections::HashMap;

use uuid::Uuid;

use super::dependents::HasDependents;
use crate::{
    error::{AppError, AppResult},
    models::{
        Author, Book, BookInstance, BookSummary, Collection, Entity, EntityDraft, Genre,
        GenreDraft, GenreForm,
    },
    repository::Repository,
    validation::{self, FieldError, FormInput, Submission},
};

/// Result of a create or update submission
#[derive(Debug)]
pub enum Outcome<D: EntityDraft> {
    /// Persisted (or, for genres, already present); redirect to its page
    Saved(D::Entity),
    /// Re-render the form with the draft and its errors
    Rejected(Submission<D>),
}

/// Result of a delete submission
#[derive(Debug)]
pub enum Deletion<T, D> {
    Deleted,
    /// Nothing to delete
    Missing,
    /// Refused: other documents still reference it
    Blocked { entity: T, dependents: Vec<D> },
}

/// Document counts for the catalog home page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub books: u64,
    pub book_instances: u64,
    pub book_instances_available: u64,
    pub authors: u64,
    pub genres: u64,
}

/// A book with everything its detail page shows
#[derive(Debug, Clone)]
pub struct BookDetail {
    pub book: Book,
    pub author: Option<Author>,
    pub genres: Vec<Genre>,
    pub instances: Vec<BookInstance>,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }

    /// Counts for the home page, queried concurrently
    pub async fn counts(&self) -> AppResult<CatalogCounts> {
        let (books, book_instances, book_instances_available, authors, genres) = tokio::try_join!(
            self.repository.count(Collection::Books, &[]),
            self.repository.count(Collection::BookInstances, &[]),
            self.repository.count_available_instances(),
            self.repository.count(Collection::Authors, &[]),
            self.repository.count(Collection::Genres, &[]),
        )?;
        Ok(CatalogCounts {
            books,
            book_instances,
            book_instances_available,
            authors,
            genres,
        })
    }

    pub async fn list<T: Entity>(&self) -> AppResult<Vec<T>> {
        self.repository.list().await
    }

    pub async fn get<T: Entity>(&self, id: Uuid) -> AppResult<T> {
        self.repository.get(id).await
    }

    // =========================================================================
    // Generic pipeline
    // =========================================================================

    /// A document and its dependents, fetched concurrently
    pub async fn detail<T: HasDependents>(&self, id: Uuid) -> AppResult<(T, Vec<T::Dependent>)> {
        self.with_dependents::<T>(id)
            .await?
            .ok_or_else(|| AppError::NotFound(T::NOT_FOUND.to_string()))
    }

    /// What the delete confirmation page shows; `None` when the document is gone
    pub async fn delete_confirmation<T: HasDependents>(
        &self,
        id: Uuid,
    ) -> AppResult<Option<(T, Vec<T::Dependent>)>> {
        self.with_dependents::<T>(id).await
    }

    /// Delete unless other documents still reference it
    pub async fn delete<T: HasDependents>(&self, id: Uuid) -> AppResult<Deletion<T, T::Dependent>> {
        let Some((entity, dependents)) = self.with_dependents::<T>(id).await? else {
            return Ok(Deletion::Missing);
        };
        if !dependents.is_empty() {
            tracing::warn!(
                "Refusing to delete {} {}: {} dependent document(s)",
                T::COLLECTION,
                id,
                dependents.len()
            );
            return Ok(Deletion::Blocked { entity, dependents });
        }
        self.repository.delete::<T>(id).await?;
        Ok(Deletion::Deleted)
    }

    async fn with_dependents<T: HasDependents>(
        &self,
        id: Uuid,
    ) -> AppResult<Option<(T, Vec<T::Dependent>)>> {
        let (entity, dependents) = tokio::try_join!(
            self.repository.find_by_id::<T>(id),
            T::dependents(&self.repository, id),
        )?;
        Ok(entity.map(|entity| (entity, dependents)))
    }

    /// Sanitize and validate a form, then check that every referenced
    /// document exists. All problems are collected; none short-circuits.
    pub async fn validate<F>(&self, form: F) -> AppResult<Submission<F::Draft>>
    where
        F: FormInput + Send,
        F::Draft: EntityDraft,
    {
        let mut submission = validation::check(form);
        for reference in submission.draft.references() {
            let found = match Uuid::parse_str(&reference.raw) {
                Ok(id) => self.repository.exists(reference.collection, id).await?,
                Err(_) => false,
            };
            if !found {
                let error = FieldError::new(
                    reference.field,
                    format!("{} not found", reference.collection.label()),
                );
                if !submission.errors.contains(&error) {
                    submission.errors.push(error);
                }
            }
        }
        Ok(submission)
    }

    pub async fn create<F>(&self, form: F) -> AppResult<Outcome<F::Draft>>
    where
        F: FormInput + Send,
        F::Draft: EntityDraft,
    {
        let submission = self.validate(form).await?;
        if !submission.is_valid() {
            return Ok(Outcome::Rejected(submission));
        }
        self.persist_new(submission.draft).await
    }

    /// Replace the document `id` with the submitted values
    pub async fn update<F>(&self, id: Uuid, form: F) -> AppResult<Outcome<F::Draft>>
    where
        F: FormInput + Send,
        F::Draft: EntityDraft,
    {
        let submission = self.validate(form).await?;
        if !submission.is_valid() {
            return Ok(Outcome::Rejected(submission));
        }
        let entity = submission.draft.into_entity(id)?;
        self.repository.update(&entity).await?;
        Ok(Outcome::Saved(entity))
    }

    async fn persist_new<D: EntityDraft>(&self, draft: D) -> AppResult<Outcome<D>> {
        let entity = draft.into_entity(Uuid::new_v4())?;
        self.repository.save(&entity).await?;
        Ok(Outcome::Saved(entity))
    }

    // =========================================================================
    // Entity specifics
    // =========================================================================

    /// Create a genre, or hand back the existing one with the same name
    pub async fn create_genre(&self, form: GenreForm) -> AppResult<Outcome<GenreDraft>> {
        let submission = self.validate(form).await?;
        if !submission.is_valid() {
            return Ok(Outcome::Rejected(submission));
        }
        if let Some(existing) = self.repository.genre_by_name(&submission.draft.name).await? {
            tracing::info!("Genre {} already exists as {}", existing.name, existing.id);
            return Ok(Outcome::Saved(existing));
        }
        self.persist_new(submission.draft).await
    }

    /// Books by title, each with its author when the author still exists
    pub async fn book_list(&self) -> AppResult<Vec<(Book, Option<Author>)>> {
        let (books, authors) = tokio::try_join!(
            self.repository.list::<Book>(),
            self.repository.list::<Author>(),
        )?;
        let authors: HashMap<Uuid, Author> = authors.into_iter().map(|a| (a.id, a)).collect();
        Ok(books
            .into_iter()
            .map(|book| {
                let author = authors.get(&book.author).cloned();
                (book, author)
            })
            .collect())
    }

    pub async fn book_detail(&self, id: Uuid) -> AppResult<BookDetail> {
        let (book, instances) = tokio::try_join!(
            self.repository.find_by_id::<Book>(id),
            self.repository.instances_of_book(id),
        )?;
        let book = book.ok_or_else(|| AppError::NotFound(Book::NOT_FOUND.to_string()))?;

        let (author, genres) = tokio::try_join!(
            self.repository.find_by_id::<Author>(book.author),
            self.repository.list::<Genre>(),
        )?;
        let genres = genres
            .into_iter()
            .filter(|g| book.genre.contains(&g.id))
            .collect();

        Ok(BookDetail {
            book,
            author,
            genres,
            instances,
        })
    }

    /// Authors and genres for the book form selectors
    pub async fn book_form_options(&self) -> AppResult<(Vec<Author>, Vec<Genre>)> {
        tokio::try_join!(
            self.repository.list::<Author>(),
            self.repository.list::<Genre>(),
        )
    }

    /// Book titles for the copy form selector
    pub async fn book_summaries(&self) -> AppResult<Vec<BookSummary>> {
        self.repository.book_summaries().await
    }

    /// Every copy with the title of its book
    pub async fn instance_list(&self) -> AppResult<Vec<(BookInstance, Option<BookSummary>)>> {
        let (instances, books) = tokio::try_join!(
            self.repository.list::<BookInstance>(),
            self.repository.book_summaries(),
        )?;
        let books: HashMap<Uuid, BookSummary> = books.into_iter().map(|b| (b.id, b)).collect();
        Ok(instances
            .into_iter()
            .map(|instance| {
                let book = books.get(&instance.book).cloned();
                (instance, book)
            })
            .collect())
    }

    pub async fn instance_detail(&self, id: Uuid) -> AppResult<(BookInstance, Option<Book>)> {
        let instance = self.repository.get::<BookInstance>(id).await?;
        let book = self.repository.find_by_id::<Book>(instance.book).await?;
        Ok((instance, book))
    }
}
