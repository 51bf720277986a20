use maud::{html, Markup};

use super::{delete_buttons, field_errors, layout, stored};
use crate::{
    models::{Author, Book, BookDraft, BookInstance, BookInstanceStatus, Entity, Genre},
    services::catalog::BookDetail,
    validation::FieldError,
};

pub fn list(books: &[(Book, Option<Author>)]) -> Markup {
    layout(
        "Book List",
        html! {
            @if books.is_empty() {
                p { "There are no books." }
            } @else {
                ul {
                    @for (book, author) in books {
                        li {
                            a href=(book.url()) { (stored(&book.title)) }
                            @if let Some(author) = author {
                                " (" (stored(&author.name())) ")"
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Status line of one copy, colored like its availability
pub(super) fn status_badge(status: BookInstanceStatus) -> Markup {
    let class = match status {
        BookInstanceStatus::Available => "text-success",
        BookInstanceStatus::Maintenance => "text-danger",
        BookInstanceStatus::Loaned | BookInstanceStatus::Reserved => "text-warning",
    };
    html! { span class=(class) { (status.as_str()) } }
}

fn copies(instances: &[BookInstance]) -> Markup {
    html! {
        h4 { "Copies" }
        @if instances.is_empty() {
            p { "There are no copies of this book in the library." }
        } @else {
            @for copy in instances {
                hr;
                p { (status_badge(copy.status)) }
                p { strong { "Imprint:" } " " (stored(&copy.imprint)) }
                @if copy.status != BookInstanceStatus::Available {
                    p { strong { "Due back:" } " " (copy.due_back_formatted()) }
                }
                p { strong { "Id:" } " " a href=(copy.url()) { (copy.id.to_string()) } }
            }
        }
    }
}

pub fn detail(detail: &BookDetail) -> Markup {
    let book = &detail.book;
    layout(
        &format!("Title: {}", book.title),
        html! {
            p {
                strong { "Author:" } " "
                @if let Some(author) = &detail.author {
                    a href=(author.url()) { (stored(&author.name())) }
                }
            }
            p { strong { "Summary:" } " " (stored(&book.summary)) }
            p { strong { "ISBN:" } " " (stored(&book.isbn)) }
            p {
                strong { "Genre:" } " "
                @for (i, genre) in detail.genres.iter().enumerate() {
                    @if i > 0 { ", " }
                    a href=(genre.url()) { (stored(&genre.name)) }
                }
            }
            div style="margin-left:20px;margin-top:20px" {
                (copies(&detail.instances))
            }
            hr;
            p { a href=(format!("{}/delete", book.url())) { "Delete book" } }
            p { a href=(format!("{}/update", book.url())) { "Update book" } }
        },
    )
}

pub fn form(
    title: &str,
    draft: &BookDraft,
    authors: &[Author],
    genres: &[Genre],
    errors: &[FieldError],
) -> Markup {
    layout(
        title,
        html! {
            form method="POST" action="" {
                div.form-group {
                    label for="title" { "Title:" }
                    input.form-control id="title" type="text" name="title"
                        placeholder="Name of book" required value=(stored(&draft.title));
                }
                div.form-group {
                    label for="author" { "Author:" }
                    select.form-control id="author" name="author" required {
                        option value="" { "--Please select an author--" }
                        @for author in authors {
                            @let id = author.id.to_string();
                            option value=(id) selected[draft.author == id] {
                                (stored(&author.name()))
                            }
                        }
                    }
                }
                div.form-group {
                    label for="summary" { "Summary:" }
                    textarea.form-control id="summary" name="summary"
                        placeholder="Summary" required {
                        (stored(&draft.summary))
                    }
                }
                div.form-group {
                    label for="isbn" { "ISBN:" }
                    input.form-control id="isbn" type="text" name="isbn"
                        placeholder="ISBN13" required value=(stored(&draft.isbn));
                }
                div.form-group {
                    label { "Genre:" }
                    div {
                        @for genre in genres {
                            div style="display: inline; padding-right:10px;" {
                                input.checkbox-input type="checkbox" name="genre"
                                    id=(genre.id.to_string()) value=(genre.id.to_string())
                                    checked[draft.has_genre(genre.id)];
                                label for=(genre.id.to_string()) { " " (stored(&genre.name)) }
                            }
                        }
                    }
                }
                button.btn.btn-primary type="submit" { "Submit" }
            }
            (field_errors(errors))
        },
    )
}

pub fn delete(book: &Book, instances: &[BookInstance]) -> Markup {
    layout(
        &format!("Delete Book: {}", book.title),
        html! {
            p { strong { "ISBN:" } " " (stored(&book.isbn)) }
            @if instances.is_empty() {
                (delete_buttons(book.id, "Do you really want to delete this Book?"))
            } @else {
                p { strong { "Delete the following copies before attempting to delete this book." } }
                div style="margin-left:20px;margin-top:20px" {
                    (copies(instances))
                }
            }
        },
    )
}
