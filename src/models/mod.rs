//! Catalog documents and their form/draft counterparts

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::{error::AppResult, validation::Draft};

// Re-export commonly used types
pub use author::{Author, AuthorDraft, AuthorForm};
pub use book::{Book, BookDraft, BookForm, BookSummary};
pub use book_instance::{BookInstance, BookInstanceDraft, BookInstanceForm, BookInstanceStatus};
pub use genre::{Genre, GenreDraft, GenreForm};

/// Document collections held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Authors,
    Genres,
    Books,
    BookInstances,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Authors => "authors",
            Collection::Genres => "genres",
            Collection::Books => "books",
            Collection::BookInstances => "bookinstances",
        }
    }

    /// Singular, human-readable name of one document
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Authors => "Author",
            Collection::Genres => "Genre",
            Collection::Books => "Book",
            Collection::BookInstances => "Book copy",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted catalog document
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: Collection;
    /// Field list pages sort on (ascending); `None` keeps insertion order
    const SORT_KEY: Option<&'static str>;
    /// Message of the 404 raised when a lookup by id finds nothing
    const NOT_FOUND: &'static str;
    /// Where the list page lives; deletes redirect here
    const LIST_URL: &'static str;

    fn id(&self) -> Uuid;

    /// Detail page of this document
    fn url(&self) -> String;
}

/// A reference to another document, as typed into a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub field: &'static str,
    pub collection: Collection,
    pub raw: String,
}

/// A validated draft that can become a document
pub trait EntityDraft: Draft + Send + Sync {
    type Entity: Entity;

    /// Documents this draft points at; each must exist before saving
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }

    fn into_entity(self, id: Uuid) -> AppResult<Self::Entity>;
}

/// Parse a reference id, reporting a malformed one as an internal error
pub(crate) fn parse_reference(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|e| crate::error::AppError::Internal(format!("Invalid reference {}: {}", raw, e)))
}

/// Medium date format used throughout the pages, e.g. `Jan 3, 1892`
pub(crate) fn format_date(date: &chrono::NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
