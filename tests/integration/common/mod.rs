//! Shared helpers: an in-memory app and one-shot request drivers

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use locallibrary::{
    api,
    config::AppConfig,
    repository::{MemoryDocumentStore, Repository},
    services::{catalog::CatalogService, Services},
    AppState,
};

pub struct TestApp {
    pub router: Router,
    pub catalog: CatalogService,
}

/// What a test looks at in a response
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let repository = Repository::new(Arc::new(MemoryDocumentStore::new()));
        let services = Services::new(repository);
        let catalog = services.catalog.clone();
        let state = AppState {
            config: Arc::new(config),
            services: Arc::new(services),
        };
        Self {
            router: api::router(state),
            catalog,
        }
    }

    pub async fn get(&self, uri: &str) -> Page {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body
    pub async fn post(&self, uri: &str, form: &str) -> Page {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> Page {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        Page {
            status,
            location,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// POST a form that must be accepted; returns the redirect target
    pub async fn create(&self, uri: &str, form: &str) -> String {
        let page = self.post(uri, form).await;
        assert_eq!(page.status, StatusCode::SEE_OTHER, "rejected: {}", page.body);
        page.location.expect("redirect without location")
    }

    pub async fn create_author(&self, first: &str, family: &str) -> String {
        self.create(
            "/catalog/author/create",
            &format!("first_name={}&family_name={}", first, family),
        )
        .await
    }

    pub async fn create_genre(&self, name: &str) -> String {
        self.create("/catalog/genre/create", &format!("name={}", name)).await
    }

    pub async fn create_book(&self, title: &str, author_url: &str, genre_urls: &[&str]) -> String {
        let mut form = format!(
            "title={}&author={}&summary=A+summary&isbn=9780000000000",
            title,
            id_of(author_url)
        );
        for genre in genre_urls {
            form.push_str(&format!("&genre={}", id_of(genre)));
        }
        self.create("/catalog/book/create", &form).await
    }
}

/// Last path segment of a detail URL
pub fn id_of(url: &str) -> &str {
    url.rsplit('/').next().unwrap()
}
