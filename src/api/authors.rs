//! Author pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::Markup;

use super::{parse_id, see, see_list, FormBody};
use crate::{
    error::AppResult,
    models::{Author, AuthorDraft, AuthorForm},
    services::catalog::{Deletion, Outcome},
    views, AppState,
};

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let authors = state.services.catalog.list::<Author>().await?;
    Ok(views::authors::list(&authors))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = parse_id::<Author>(&id)?;
    let (author, books) = state.services.catalog.detail::<Author>(id).await?;
    Ok(views::authors::detail(&author, &books))
}

pub async fn create_form() -> Markup {
    views::authors::form("Create Author", &AuthorDraft::default(), &[])
}

pub async fn create(
    State(state): State<AppState>,
    FormBody(form): FormBody<AuthorForm>,
) -> AppResult<Response> {
    Ok(match state.services.catalog.create(form).await? {
        Outcome::Saved(author) => see(&author),
        Outcome::Rejected(submission) => {
            views::authors::form("Create Author", &submission.draft, &submission.errors)
                .into_response()
        }
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id::<Author>(&id)?;
    let author = state.services.catalog.get::<Author>(id).await?;
    Ok(views::authors::form("Update Author", &AuthorDraft::from(&author), &[]))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(form): FormBody<AuthorForm>,
) -> AppResult<Response> {
    let id = parse_id::<Author>(&id)?;
    Ok(match state.services.catalog.update(id, form).await? {
        Outcome::Saved(author) => see(&author),
        Outcome::Rejected(submission) => {
            views::authors::form("Update Author", &submission.draft, &submission.errors)
                .into_response()
        }
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id::<Author>(&id)?;
    Ok(match state.services.catalog.delete_confirmation::<Author>(id).await? {
        Some((author, books)) => views::authors::delete(&author, &books).into_response(),
        None => see_list::<Author>(),
    })
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let id = parse_id::<Author>(&id)?;
    Ok(match state.services.catalog.delete::<Author>(id).await? {
        Deletion::Blocked { entity, dependents } => {
            views::authors::delete(&entity, &dependents).into_response()
        }
        Deletion::Deleted | Deletion::Missing => see_list::<Author>(),
    })
}
