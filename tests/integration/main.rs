//! Integration tests driving the router against the in-memory store

mod api_tests;
mod authors;
mod book_instances;
mod books;
mod common;
mod genres;
mod pages;
