use maud::{html, Markup};

use super::{delete_buttons, field_errors, layout, stored};
use crate::{
    models::{Book, Entity, Genre, GenreDraft},
    validation::FieldError,
};

pub fn list(genres: &[Genre]) -> Markup {
    layout(
        "Genre List",
        html! {
            @if genres.is_empty() {
                p { "There are no genres." }
            } @else {
                ul {
                    @for genre in genres {
                        li { a href=(genre.url()) { (stored(&genre.name)) } }
                    }
                }
            }
        },
    )
}

fn books_in(books: &[Book]) -> Markup {
    html! {
        h4 { "Books" }
        @if books.is_empty() {
            p { "This genre has no books." }
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

pub fn detail(genre: &Genre, books: &[Book]) -> Markup {
    layout(
        &format!("Genre: {}", genre.name),
        html! {
            div style="margin-left:20px;margin-top:20px" {
                (books_in(books))
            }
            hr;
            p { a href=(format!("{}/delete", genre.url())) { "Delete genre" } }
            p { a href=(format!("{}/update", genre.url())) { "Update genre" } }
        },
    )
}

pub fn form(title: &str, draft: &GenreDraft, errors: &[FieldError]) -> Markup {
    layout(
        title,
        html! {
            form method="POST" action="" {
                div.form-group {
                    label for="name" { "Genre:" }
                    input.form-control id="name" type="text" name="name"
                        placeholder="Fantasy, Poetry etc." required
                        value=(stored(&draft.name));
                }
                button.btn.btn-primary type="submit" { "Submit" }
            }
            (field_errors(errors))
        },
    )
}

pub fn delete(genre: &Genre, books: &[Book]) -> Markup {
    layout(
        &format!("Delete Genre: {}", genre.name),
        html! {
            @if books.is_empty() {
                (delete_buttons(genre.id, "Do you really want to delete this Genre?"))
            } @else {
                p { strong { "Delete the following books before attempting to delete this genre." } }
                div style="margin-left:20px;margin-top:20px" {
                    (books_in(books))
                }
            }
        },
    )
}
