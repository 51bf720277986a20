//! Book copy pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::Markup;

use super::{parse_id, see, see_list, FormBody};
use crate::{
    error::{AppError, AppResult},
    models::{BookInstance, BookInstanceDraft, BookInstanceForm},
    services::catalog::{CatalogService, Deletion, Outcome},
    validation::FieldError,
    views, AppState,
};

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let instances = state.services.catalog.instance_list().await?;
    Ok(views::book_instances::list(&instances))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = parse_id::<BookInstance>(&id)?;
    let (copy, book) = state.services.catalog.instance_detail(id).await?;
    Ok(views::book_instances::detail(&copy, book.as_ref()))
}

async fn form_page(
    catalog: &CatalogService,
    title: &str,
    draft: &BookInstanceDraft,
    errors: &[FieldError],
) -> AppResult<Markup> {
    let books = catalog.book_summaries().await?;
    Ok(views::book_instances::form(title, draft, &books, errors))
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Markup> {
    let draft = BookInstanceDraft::default();
    form_page(&state.services.catalog, "Create BookInstance", &draft, &[]).await
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(form): FormBody<BookInstanceForm>,
) -> AppResult<Response> {
    let catalog = &state.services.catalog;
    Ok(match catalog.create(form).await? {
        Outcome::Saved(copy) => see(&copy),
        Outcome::Rejected(submission) => {
            form_page(catalog, "Create BookInstance", &submission.draft, &submission.errors)
                .await?
                .into_response()
        }
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id::<BookInstance>(&id)?;
    let catalog = &state.services.catalog;
    let copy = catalog.get::<BookInstance>(id).await?;
    form_page(catalog, "Update BookInstance", &BookInstanceDraft::from(&copy), &[]).await
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(form): FormBody<BookInstanceForm>,
) -> AppResult<Response> {
    let id = parse_id::<BookInstance>(&id)?;
    let catalog = &state.services.catalog;
    Ok(match catalog.update(id, form).await? {
        Outcome::Saved(copy) => see(&copy),
        Outcome::Rejected(submission) => {
            form_page(catalog, "Update BookInstance", &submission.draft, &submission.errors)
                .await?
                .into_response()
        }
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id::<BookInstance>(&id)?;
    match state.services.catalog.instance_detail(id).await {
        Ok((copy, book)) => Ok(views::book_instances::delete(&copy, book.as_ref()).into_response()),
        Err(AppError::NotFound(_)) => Ok(see_list::<BookInstance>()),
        Err(e) => Err(e),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let id = parse_id::<BookInstance>(&id)?;
    Ok(match state.services.catalog.delete::<BookInstance>(id).await? {
        // copies have no dependents
        Deletion::Blocked { .. } | Deletion::Deleted | Deletion::Missing => {
            see_list::<BookInstance>()
        }
    })
}
