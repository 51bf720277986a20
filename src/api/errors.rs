//! Error boundary: turns failed requests into the HTML error page

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::{AppError, ErrorReport},
    views, AppState,
};

/// Render every response carrying an [`ErrorReport`] as the error page.
///
/// 5xx messages and all debug detail are only shown in development.
pub async fn render_error_pages(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let Some(report) = response.extensions_mut().remove::<ErrorReport>() else {
        return response;
    };

    let development = state.config.is_development();
    let message = if report.status.is_server_error() && !development {
        "Internal Server Error"
    } else {
        report.message.as_str()
    };
    let detail = development.then_some(report.detail.as_str());

    (report.status, views::error_page(report.status, message, detail)).into_response()
}

/// Fallback for unrouted paths
pub async fn not_found() -> AppError {
    AppError::NotFound(
        StatusCode::NOT_FOUND
            .canonical_reason()
            .unwrap_or("Not Found")
            .to_string(),
    )
}
