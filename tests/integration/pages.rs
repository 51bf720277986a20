use axum::http::StatusCode;

use locallibrary::config::{AppConfig, RunEnvironment};

use crate::common::{id_of, TestApp};

#[tokio::test]
async fn root_redirects_to_catalog_home() {
    let app = TestApp::new();
    let page = app.get("/").await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/catalog"));
}

#[tokio::test]
async fn home_counts_records() {
    let app = TestApp::new();
    let author = app.create_author("Octavia", "Butler").await;
    app.create_genre("SciFi").await;
    let book = app.create_book("Kindred", &author, &[]).await;
    for status in ["Available", "Loaned", "Available"] {
        app.create(
            "/catalog/bookinstance/create",
            &format!("book={}&imprint=Beacon&status={}", id_of(&book), status),
        )
        .await;
    }

    let home = app.get("/catalog").await;
    assert_eq!(home.status, StatusCode::OK);
    assert!(home.body.contains("Books:</strong> 1"));
    assert!(home.body.contains("Copies:</strong> 3"));
    assert!(home.body.contains("Copies available:</strong> 2"));
    assert!(home.body.contains("Authors:</strong> 1"));
    assert!(home.body.contains("Genres:</strong> 1"));
}

#[tokio::test]
async fn unknown_path_renders_the_error_page() {
    let app = TestApp::new();
    let page = app.get("/catalog/nowhere/at/all").await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.body.contains("404 Not Found"));
}

#[tokio::test]
async fn error_detail_is_hidden_in_production() {
    let config = AppConfig {
        environment: RunEnvironment::Production,
        ..AppConfig::default()
    };
    let app = TestApp::with_config(config);
    let page = app.get("/catalog/genre/not-an-id").await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    assert!(page.body.contains("Genre not found"));
    assert!(!page.body.contains("<pre>"));

    let dev = TestApp::new().get("/catalog/genre/not-an-id").await;
    assert!(dev.body.contains("<pre>"));
}

#[tokio::test]
async fn health_and_readiness() {
    let app = TestApp::new();
    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert!(health.body.contains("\"status\":\"healthy\""));

    let ready = app.get("/ready").await;
    assert_eq!(ready.status, StatusCode::OK);
    assert!(ready.body.contains("\"status\":\"ready\""));
}

#[tokio::test]
async fn security_headers_are_set() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let app = TestApp::new();
    let response = app
        .router
        .clone()
        .oneshot(Request::get("/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let headers = response.headers();
    let csp = headers["content-security-policy"].to_str().unwrap();
    assert!(csp.contains("code.jquery.com"));
    assert!(csp.contains("cdn.jsdelivr.net"));
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "SAMEORIGIN");
}

#[tokio::test]
async fn malformed_form_bodies_render_the_error_page() {
    use axum::{body::Body, http::Request};

    let app = TestApp::new();

    let untyped = Request::post("/catalog/author/create")
        .body(Body::from("first_name=Mary&family_name=Shelley"))
        .unwrap();
    let page = app.send(untyped).await;
    assert_eq!(page.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(page.body.starts_with("<!DOCTYPE html>"));
    assert!(page.body.contains("415 "));
    assert!(page.body.contains("Content-Type"));

    // nothing was stored
    assert!(app.get("/catalog/authors").await.body.contains("There are no authors."));
}
