//! Book pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::Markup;

use super::{parse_id, see, see_list, FormBody};
use crate::{
    error::AppResult,
    models::{Book, BookDraft, BookForm},
    services::catalog::{CatalogService, Deletion, Outcome},
    validation::FieldError,
    views, AppState,
};

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let books = state.services.catalog.book_list().await?;
    Ok(views::books::list(&books))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = parse_id::<Book>(&id)?;
    let detail = state.services.catalog.book_detail(id).await?;
    Ok(views::books::detail(&detail))
}

/// The book form with its author and genre selectors filled in
async fn form_page(
    catalog: &CatalogService,
    title: &str,
    draft: &BookDraft,
    errors: &[FieldError],
) -> AppResult<Markup> {
    let (authors, genres) = catalog.book_form_options().await?;
    Ok(views::books::form(title, draft, &authors, &genres, errors))
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Markup> {
    form_page(&state.services.catalog, "Create Book", &BookDraft::default(), &[]).await
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(form): FormBody<BookForm>,
) -> AppResult<Response> {
    let catalog = &state.services.catalog;
    Ok(match catalog.create(form).await? {
        Outcome::Saved(book) => see(&book),
        Outcome::Rejected(submission) => {
            form_page(catalog, "Create Book", &submission.draft, &submission.errors)
                .await?
                .into_response()
        }
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id::<Book>(&id)?;
    let catalog = &state.services.catalog;
    let book = catalog.get::<Book>(id).await?;
    form_page(catalog, "Update Book", &BookDraft::from(&book), &[]).await
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(form): FormBody<BookForm>,
) -> AppResult<Response> {
    let id = parse_id::<Book>(&id)?;
    let catalog = &state.services.catalog;
    Ok(match catalog.update(id, form).await? {
        Outcome::Saved(book) => see(&book),
        Outcome::Rejected(submission) => {
            form_page(catalog, "Update Book", &submission.draft, &submission.errors)
                .await?
                .into_response()
        }
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id::<Book>(&id)?;
    Ok(match state.services.catalog.delete_confirmation::<Book>(id).await? {
        Some((book, instances)) => views::books::delete(&book, &instances).into_response(),
        None => see_list::<Book>(),
    })
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let id = parse_id::<Book>(&id)?;
    Ok(match state.services.catalog.delete::<Book>(id).await? {
        Deletion::Blocked { entity, dependents } => {
            views::books::delete(&entity, &dependents).into_response()
        }
        Deletion::Deleted | Deletion::Missing => see_list::<Book>(),
    })
}
