//! HTML pages, rendered with maud.
//!
//! Text fields are stored already HTML-escaped (see [`crate::validation`]),
//! so stored values are spliced with [`stored`] instead of being escaped a
//! second time. Anything that did not go through sanitization, such as raw
//! date input, is rendered the normal, escaping way.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod home;

use axum::http::StatusCode;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::validation::FieldError;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/js/bootstrap.bundle.min.js";
const JQUERY_JS: &str = "https://code.jquery.com/jquery-3.7.1.slim.min.js";

const STYLE: &str = "\
.sidebar-nav { margin-top: 20px; padding: 0; list-style: none; }\n\
.form-errors { color: #b00020; }\n\
dt { margin-top: 0.75rem; }";

/// Splice a value that was escaped when it was stored
pub fn stored(value: &str) -> PreEscaped<&str> {
    PreEscaped(value)
}

/// Site chrome shared by every page; `title` is spliced as stored text
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (stored(title)) " | Local Library" }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
                style { (PreEscaped(STYLE)) }
            }
            body {
                div.container-fluid {
                    div.row {
                        div.col-sm-2 {
                            ul.sidebar-nav {
                                li { a href="/catalog" { "Home" } }
                                li { a href="/catalog/books" { "All books" } }
                                li { a href="/catalog/authors" { "All authors" } }
                                li { a href="/catalog/genres" { "All genres" } }
                                li { a href="/catalog/bookinstances" { "All book-instances" } }
                                li { hr; }
                                li { a href="/catalog/author/create" { "Create new author" } }
                                li { a href="/catalog/genre/create" { "Create new genre" } }
                                li { a href="/catalog/book/create" { "Create new book" } }
                                li { a href="/catalog/bookinstance/create" { "Create new book instance (copy)" } }
                            }
                        }
                        div.col-sm-10 {
                            h1 { (stored(title)) }
                            (content)
                        }
                    }
                }
                script src=(JQUERY_JS) {}
                script src=(BOOTSTRAP_JS) {}
            }
        }
    }
}

/// Messages listed under a rejected form, in the order they were raised
pub fn field_errors(errors: &[FieldError]) -> Markup {
    html! {
        @if !errors.is_empty() {
            ul.form-errors {
                @for error in errors {
                    li data-field=(error.field) { (error.message) }
                }
            }
        }
    }
}

/// Error boundary page; `detail` is only passed in development
pub fn error_page(status: StatusCode, message: &str, detail: Option<&str>) -> Markup {
    layout(
        "Error",
        html! {
            h2 { (status.as_u16()) " " (message) }
            @if let Some(detail) = detail {
                pre { (detail) }
            }
        },
    )
}

/// Confirmation body shared by every delete page
fn delete_buttons(id: uuid::Uuid, prompt: &str) -> Markup {
    html! {
        p { (prompt) }
        form method="POST" action="" {
            div.form-group {
                input.form-control id="id" type="hidden" name="id" value=(id.to_string());
            }
            button.btn.btn-primary type="submit" { "Delete" }
        }
    }
}
