//! Relationship queries between catalog documents

use uuid::Uuid;

use super::{Filter, FindQuery, Repository};
use crate::{
    error::AppResult,
    models::{Book, BookInstance, BookInstanceStatus, BookSummary, Collection, Genre},
};

impl Repository {
    /// Title and summary of every book by an author
    pub async fn books_by_author(&self, author_id: Uuid) -> AppResult<Vec<BookSummary>> {
        let query = FindQuery::new()
            .filter("author", author_id.to_string())
            .project(BookSummary::FIELDS);
        self.find_as(Collection::Books, &query).await
    }

    /// Books tagged with a genre
    pub async fn books_by_genre(&self, genre_id: Uuid) -> AppResult<Vec<Book>> {
        let query = FindQuery::new().filter("genre", genre_id.to_string());
        self.find(&query).await
    }

    /// Every copy of a book
    pub async fn instances_of_book(&self, book_id: Uuid) -> AppResult<Vec<BookInstance>> {
        let query = FindQuery::new().filter("book", book_id.to_string());
        self.find(&query).await
    }

    /// Exact, case-sensitive name match
    pub async fn genre_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let query = FindQuery::new().filter("name", name);
        self.find_one(&query).await
    }

    /// Titles of all books, for selectors
    pub async fn book_summaries(&self) -> AppResult<Vec<BookSummary>> {
        let query = FindQuery::new()
            .sort_by("title")
            .project(BookSummary::FIELDS);
        self.find_as(Collection::Books, &query).await
    }

    pub async fn count_available_instances(&self) -> AppResult<u64> {
        let available = Filter::eq("status", BookInstanceStatus::Available.as_str());
        self.count(Collection::BookInstances, &[available]).await
    }
}
