use maud::{html, Markup};

use super::{books::status_badge, delete_buttons, field_errors, layout, stored};
use crate::{
    models::{Book, BookInstance, BookInstanceDraft, BookInstanceStatus, BookSummary, Entity},
    validation::FieldError,
};

pub fn list(instances: &[(BookInstance, Option<BookSummary>)]) -> Markup {
    layout(
        "Book Instance List",
        html! {
            @if instances.is_empty() {
                p { "There are no book copies in this library." }
            } @else {
                ul {
                    @for (copy, book) in instances {
                        li {
                            a href=(copy.url()) {
                                @if let Some(book) = book {
                                    (stored(&book.title)) " : "
                                }
                                (stored(&copy.imprint))
                            }
                            " - " (status_badge(copy.status))
                            @if copy.status != BookInstanceStatus::Available {
                                span { " (Due: " (copy.due_back_formatted()) ")" }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn summary(copy: &BookInstance, book: Option<&Book>) -> Markup {
    html! {
        h4 { "ID: " (copy.id.to_string()) }
        p {
            strong { "Title:" } " "
            @if let Some(book) = book {
                a href=(book.url()) { (stored(&book.title)) }
            }
        }
        p { strong { "Imprint:" } " " (stored(&copy.imprint)) }
        p { strong { "Status:" } " " (status_badge(copy.status)) }
        @if copy.status != BookInstanceStatus::Available {
            p { strong { "Due back:" } " " (copy.due_back_formatted()) }
        }
    }
}

pub fn detail(copy: &BookInstance, book: Option<&Book>) -> Markup {
    let title = book.map(|b| b.title.as_str()).unwrap_or_default();
    layout(
        &format!("Copy: {}", title),
        html! {
            (summary(copy, book))
            hr;
            p { a href=(format!("{}/delete", copy.url())) { "Delete BookInstance" } }
            p { a href=(format!("{}/update", copy.url())) { "Update BookInstance" } }
        },
    )
}

pub fn form(
    title: &str,
    draft: &BookInstanceDraft,
    books: &[BookSummary],
    errors: &[FieldError],
) -> Markup {
    let status = draft.status();
    layout(
        title,
        html! {
            form method="POST" action="" {
                div.form-group {
                    label for="book" { "Book:" }
                    select.form-control id="book" name="book" required {
                        option value="" { "--Please select a book--" }
                        @for book in books {
                            @let id = book.id.to_string();
                            option value=(id) selected[draft.book == id] { (stored(&book.title)) }
                        }
                    }
                }
                div.form-group {
                    label for="imprint" { "Imprint:" }
                    input.form-control id="imprint" type="text" name="imprint"
                        placeholder="Publisher and date information" required
                        value=(stored(&draft.imprint));
                }
                div.form-group {
                    label for="due_back" { "Date when book available:" }
                    input.form-control id="due_back" type="date" name="due_back"
                        value=(draft.due_back);
                }
                div.form-group {
                    label for="status" { "Status:" }
                    select.form-control id="status" name="status" required {
                        @for choice in BookInstanceStatus::ALL {
                            option value=(choice.as_str()) selected[choice == status] {
                                (choice.as_str())
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

pub fn delete(copy: &BookInstance, book: Option<&Book>) -> Markup {
    layout(
        "Delete BookInstance",
        html! {
            (summary(copy, book))
            (delete_buttons(copy.id, "Do you really want to delete this BookInstance?"))
        },
    )
}
