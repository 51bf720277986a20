//! Genre pages

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::Markup;

use super::{parse_id, see, see_list, FormBody};
use crate::{
    error::AppResult,
    models::{Genre, GenreDraft, GenreForm},
    services::catalog::{Deletion, Outcome},
    views, AppState,
};

pub async fn list(State(state): State<AppState>) -> AppResult<Markup> {
    let genres = state.services.catalog.list::<Genre>().await?;
    Ok(views::genres::list(&genres))
}

pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Markup> {
    let id = parse_id::<Genre>(&id)?;
    let (genre, books) = state.services.catalog.detail::<Genre>(id).await?;
    Ok(views::genres::detail(&genre, &books))
}

pub async fn create_form() -> Markup {
    views::genres::form("Create Genre", &GenreDraft::default(), &[])
}

/// An existing genre with the same name is reused, not duplicated
pub async fn create(
    State(state): State<AppState>,
    FormBody(form): FormBody<GenreForm>,
) -> AppResult<Response> {
    Ok(match state.services.catalog.create_genre(form).await? {
        Outcome::Saved(genre) => see(&genre),
        Outcome::Rejected(submission) => {
            views::genres::form("Create Genre", &submission.draft, &submission.errors)
                .into_response()
        }
    })
}

pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Markup> {
    let id = parse_id::<Genre>(&id)?;
    let genre = state.services.catalog.get::<Genre>(id).await?;
    Ok(views::genres::form("Update Genre", &GenreDraft::from(&genre), &[]))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    FormBody(form): FormBody<GenreForm>,
) -> AppResult<Response> {
    let id = parse_id::<Genre>(&id)?;
    Ok(match state.services.catalog.update(id, form).await? {
        Outcome::Saved(genre) => see(&genre),
        Outcome::Rejected(submission) => {
            views::genres::form("Update Genre", &submission.draft, &submission.errors)
                .into_response()
        }
    })
}

pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id::<Genre>(&id)?;
    Ok(match state.services.catalog.delete_confirmation::<Genre>(id).await? {
        Some((genre, books)) => views::genres::delete(&genre, &books).into_response(),
        None => see_list::<Genre>(),
    })
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Response> {
    let id = parse_id::<Genre>(&id)?;
    Ok(match state.services.catalog.delete::<Genre>(id).await? {
        Deletion::Blocked { entity, dependents } => {
            views::genres::delete(&entity, &dependents).into_response()
        }
        Deletion::Deleted | Deletion::Missing => see_list::<Genre>(),
    })
}
