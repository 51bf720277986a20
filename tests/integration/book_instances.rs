use axum::http::StatusCode;

use crate::common::{id_of, TestApp};

async fn seeded_book(app: &TestApp) -> String {
    let author = app.create_author("Ann", "Leckie").await;
    app.create_book("Ancillary", &author, &[]).await
}

#[tokio::test]
async fn copy_defaults_to_maintenance_and_shows_its_book() {
    let app = TestApp::new();
    let book = seeded_book(&app).await;

    let copy = app
        .create(
            "/catalog/bookinstance/create",
            &format!("book={}&imprint=Orbit+2013", id_of(&book)),
        )
        .await;
    assert!(copy.starts_with("/catalog/bookinstance/"));

    let detail = app.get(&copy).await.body;
    assert!(detail.contains("Maintenance"));
    assert!(detail.contains("Ancillary"));
    assert!(detail.contains("Orbit 2013"));

    let list = app.get("/catalog/bookinstances").await.body;
    assert!(list.contains("Ancillary : Orbit 2013"));
}

#[tokio::test]
async fn invalid_status_and_date_are_reported() {
    let app = TestApp::new();
    let book = seeded_book(&app).await;

    let page = app
        .post(
            "/catalog/bookinstance/create",
            &format!("book={}&imprint=Orbit&status=Lost&due_back=someday", id_of(&book)),
        )
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Invalid status"));
    assert!(page.body.contains("Invalid date"));
}

#[tokio::test]
async fn missing_book_reference_is_reported() {
    let app = TestApp::new();
    let page = app
        .post(
            "/catalog/bookinstance/create",
            "book=7b0f5c9e-4a36-4a8e-9a57-1b7e3b2f2b10&imprint=Orbit",
        )
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Book not found"));

    let empty = app.post("/catalog/bookinstance/create", "imprint=Orbit").await;
    assert!(empty.body.contains("Book must be specified"));
}

#[tokio::test]
async fn loaned_copy_shows_due_date_and_can_be_deleted() {
    let app = TestApp::new();
    let book = seeded_book(&app).await;
    let copy = app
        .create(
            "/catalog/bookinstance/create",
            &format!(
                "book={}&imprint=Orbit&status=Loaned&due_back=2024-03-01",
                id_of(&book)
            ),
        )
        .await;
    assert!(app.get(&copy).await.body.contains("Mar 1, 2024"));

    let confirm = app.get(&format!("{}/delete", copy)).await;
    assert!(confirm.body.contains("Do you really want to delete this BookInstance?"));

    let deleted = app.post(&format!("{}/delete", copy), "").await;
    assert_eq!(deleted.location.as_deref(), Some("/catalog/bookinstances"));
    assert_eq!(app.get(&copy).await.status, StatusCode::NOT_FOUND);
    assert!(app.get(&copy).await.body.contains("Book copy not found"));
}
