use maud::{html, Markup};

use super::{delete_buttons, field_errors, layout, stored};
use crate::{
    models::{Author, AuthorDraft, BookSummary, Entity},
    validation::FieldError,
};

pub fn list(authors: &[Author]) -> Markup {
    layout(
        "Author List",
        html! {
            @if authors.is_empty() {
                p { "There are no authors." }
            } @else {
                ul {
                    @for author in authors {
                        li {
                            a href=(author.url()) { (stored(&author.name())) }
                            " (" (author.lifespan()) ")"
                        }
                    }
                }
            }
        },
    )
}

fn books_by(books: &[BookSummary]) -> Markup {
    html! {
        h4 { "Books" }
        @if books.is_empty() {
            p { "This author has no books." }
        } @else {
            dl {
                @for book in books {
                    dt { a href=(book.url()) { (stored(&book.title)) } }
                    dd { (stored(&book.summary)) }
                }
            }
        }
    }
}

pub fn detail(author: &Author, books: &[BookSummary]) -> Markup {
    layout(
        &format!("Author: {}", author.name()),
        html! {
            p { (author.lifespan()) }
            div style="margin-left:20px;margin-top:20px" {
                (books_by(books))
            }
            hr;
            p { a href=(format!("{}/delete", author.url())) { "Delete author" } }
            p { a href=(format!("{}/update", author.url())) { "Update author" } }
        },
    )
}

pub fn form(title: &str, draft: &AuthorDraft, errors: &[FieldError]) -> Markup {
    layout(
        title,
        html! {
            form method="POST" action="" {
                div.form-group {
                    label for="first_name" { "First name:" }
                    input.form-control id="first_name" type="text" name="first_name"
                        placeholder="First name (alphanumeric)" required
                        value=(stored(&draft.first_name));
                    label for="family_name" { "Family name:" }
                    input.form-control id="family_name" type="text" name="family_name"
                        placeholder="Family name (alphanumeric)" required
                        value=(stored(&draft.family_name));
                }
                div.form-group {
                    label for="date_of_birth" { "Date of birth:" }
                    input.form-control id="date_of_birth" type="date" name="date_of_birth"
                        value=(draft.date_of_birth);
                }
                div.form-group {
                    label for="date_of_death" { "Date of death:" }
                    input.form-control id="date_of_death" type="date" name="date_of_death"
                        value=(draft.date_of_death);
                }
                button.btn.btn-primary type="submit" { "Submit" }
            }
            (field_errors(errors))
        },
    )
}

pub fn delete(author: &Author, books: &[BookSummary]) -> Markup {
    layout(
        &format!("Delete Author: {}", author.name()),
        html! {
            p { (author.lifespan()) }
            @if books.is_empty() {
                (delete_buttons(author.id, "Do you really want to delete this Author?"))
            } @else {
                p { strong { "Delete the following books before attempting to delete this author." } }
                div style="margin-left:20px;margin-top:20px" {
                    (books_by(books))
                }
            }
        },
    )
}
