//! Book model and related types

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{parse_reference, Collection, Entity, EntityDraft, Reference};
use crate::{
    error::AppResult,
    validation::{self, Draft, FormInput},
};

/// Book document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    /// Author id
    pub author: Uuid,
    pub summary: String,
    pub isbn: String,
    /// Genre ids
    #[serde(default)]
    pub genre: Vec<Uuid>,
}

fn book_url(id: Uuid) -> String {
    format!("/catalog/book/{}", id)
}

impl Entity for Book {
    const COLLECTION: Collection = Collection::Books;
    const SORT_KEY: Option<&'static str> = Some("title");
    const NOT_FOUND: &'static str = "Book not found";
    const LIST_URL: &'static str = "/catalog/books";

    fn id(&self) -> Uuid {
        self.id
    }

    fn url(&self) -> String {
        book_url(self.id)
    }
}

/// Projection of a book used by listings and selectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

impl BookSummary {
    /// Fields to project when only a summary is needed
    pub const FIELDS: &'static [&'static str] = &["id", "title", "summary"];

    pub fn url(&self) -> String {
        book_url(self.id)
    }
}

/// Raw book form body; `genre` repeats once per ticked checkbox
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub genre: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct BookDraft {
    #[validate(length(min = 1, message = "Title must not be empty."))]
    pub title: String,
    #[validate(length(min = 1, message = "Author must not be empty."))]
    pub author: String,
    #[validate(length(min = 1, message = "Summary must not be empty."))]
    pub summary: String,
    #[validate(length(min = 1, message = "ISBN must not be empty"))]
    pub isbn: String,
    pub genre: Vec<String>,
}

impl BookDraft {
    /// Whether the form should show the genre checkbox ticked
    pub fn has_genre(&self, id: Uuid) -> bool {
        let id = id.to_string();
        self.genre.iter().any(|g| *g == id)
    }
}

impl Draft for BookDraft {
    const FIELDS: &'static [&'static str] = &["title", "author", "summary", "isbn", "genre"];
}

impl FormInput for BookForm {
    type Draft = BookDraft;

    fn sanitize(self) -> BookDraft {
        BookDraft {
            title: validation::sanitize(&self.title),
            author: validation::sanitize(&self.author),
            summary: validation::sanitize(&self.summary),
            isbn: validation::sanitize(&self.isbn),
            // repeated keys tag a genre once, in first-seen order
            genre: self
                .genre
                .iter()
                .map(|g| validation::sanitize(g))
                .filter(|g| !g.is_empty())
                .collect::<IndexSet<_>>()
                .into_iter()
                .collect(),
        }
    }
}

impl EntityDraft for BookDraft {
    type Entity = Book;

    fn references(&self) -> Vec<Reference> {
        let mut references = Vec::with_capacity(self.genre.len() + 1);
        if !self.author.is_empty() {
            references.push(Reference {
                field: "author",
                collection: Collection::Authors,
                raw: self.author.clone(),
            });
        }
        references.extend(self.genre.iter().map(|g| Reference {
            field: "genre",
            collection: Collection::Genres,
            raw: g.clone(),
        }));
        references
    }

    fn into_entity(self, id: Uuid) -> AppResult<Book> {
        let genre = self
            .genre
            .iter()
            .map(|g| parse_reference(g))
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Book {
            id,
            author: parse_reference(&self.author)?,
            title: self.title,
            summary: self.summary,
            isbn: self.isbn,
            genre,
        })
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.to_string(),
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre: book.genre.iter().map(|g| g.to_string()).collect(),
        }
    }
}
