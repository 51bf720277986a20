//! HTTP handlers for the catalog pages

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod errors;
pub mod genres;
pub mod health;
pub mod home;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header, HeaderValue},
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::de::DeserializeOwned;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    compression::CompressionLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use uuid::Uuid;

use crate::{
    config::RateLimitConfig,
    error::{AppError, AppResult},
    models::Entity,
    AppState,
};

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
script-src 'self' code.jquery.com cdn.jsdelivr.net; \
style-src 'self' 'unsafe-inline' cdn.jsdelivr.net";

/// Parse a path id; a malformed id is reported like a missing document
pub(crate) fn parse_id<T: Entity>(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(T::NOT_FOUND.to_string()))
}

/// 303 to the detail page of a saved document
pub(crate) fn see<T: Entity>(entity: &T) -> Response {
    Redirect::to(&entity.url()).into_response()
}

/// 303 to the list page of a collection
pub(crate) fn see_list<T: Entity>() -> Response {
    Redirect::to(T::LIST_URL).into_response()
}

/// Urlencoded form body whose rejections go through the error pages.
///
/// Repeated keys deserialize into a `Vec`, as with `axum_extra`'s `Form`.
pub struct FormBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum_extra::extract::Form::<T>::from_request(req, state).await {
            Ok(axum_extra::extract::Form(value)) => Ok(FormBody(value)),
            Err(rejection) => {
                let message = rejection.to_string();
                let status = rejection.into_response().status();
                Err(AppError::Rejected { status, message })
            }
        }
    }
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        // Authors
        .route("/authors", get(authors::list))
        .route("/author/create", get(authors::create_form).post(authors::create))
        .route("/author/:id", get(authors::detail))
        .route("/author/:id/update", get(authors::update_form).post(authors::update))
        .route("/author/:id/delete", get(authors::delete_form).post(authors::delete))
        // Genres
        .route("/genres", get(genres::list))
        .route("/genre/create", get(genres::create_form).post(genres::create))
        .route("/genre/:id", get(genres::detail))
        .route("/genre/:id/update", get(genres::update_form).post(genres::update))
        .route("/genre/:id/delete", get(genres::delete_form).post(genres::delete))
        // Books
        .route("/books", get(books::list))
        .route("/book/create", get(books::create_form).post(books::create))
        .route("/book/:id", get(books::detail))
        .route("/book/:id/update", get(books::update_form).post(books::update))
        .route("/book/:id/delete", get(books::delete_form).post(books::delete))
        // Book instances
        .route("/bookinstances", get(book_instances::list))
        .route(
            "/bookinstance/create",
            get(book_instances::create_form).post(book_instances::create),
        )
        .route("/bookinstance/:id", get(book_instances::detail))
        .route(
            "/bookinstance/:id/update",
            get(book_instances::update_form).post(book_instances::update),
        )
        .route(
            "/bookinstance/:id/delete",
            get(book_instances::delete_form).post(book_instances::delete),
        )
}

/// Create the application router with all routes.
///
/// Rate limiting needs the peer address and is added by [`rate_limited`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/catalog") }))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/catalog", catalog_routes())
        .fallback(errors::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            errors::render_error_pages,
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wrap the app in a per-peer-IP token bucket.
///
/// The served router must carry `ConnectInfo<SocketAddr>` for the limiter
/// to find the peer address.
pub fn rate_limited(app: Router, config: &RateLimitConfig) -> AppResult<Router> {
    if !config.enabled {
        return Ok(app);
    }

    let governor = GovernorConfigBuilder::default()
        .per_second(config.replenish_seconds)
        .burst_size(config.burst)
        .finish()
        .ok_or_else(|| AppError::Internal("Invalid rate limit configuration".to_string()))?;

    tracing::info!(
        "Rate limiting: burst {}, one request every {}s",
        config.burst,
        config.replenish_seconds
    );

    // The layer borrows its config for the life of the process
    Ok(app.layer(GovernorLayer {
        config: Box::leak(Box::new(governor)),
    }))
}
