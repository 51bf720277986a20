use axum::http::StatusCode;

use crate::common::{id_of, TestApp};

#[tokio::test]
async fn empty_first_name_rerenders_form_and_saves_nothing() {
    let app = TestApp::new();

    let page = app
        .post("/catalog/author/create", "first_name=&family_name=Austen")
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("First name must be specified."));
    // submitted values survive the round trip
    assert!(page.body.contains("value=\"Austen\""));

    let list = app.get("/catalog/authors").await;
    assert!(list.body.contains("There are no authors."));
}

#[tokio::test]
async fn non_alphanumeric_family_name_is_rejected() {
    let app = TestApp::new();
    let page = app
        .post("/catalog/author/create", "first_name=Ursula&family_name=Le+Guin")
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Family name has non-alphanumeric characters."));
}

#[tokio::test]
async fn created_author_is_shown_trimmed_with_lifespan() {
    let app = TestApp::new();
    let url = app
        .create(
            "/catalog/author/create",
            "first_name=++John+&family_name=Tolkien&date_of_birth=1892-01-03&date_of_death=1973-09-02",
        )
        .await;
    assert!(url.starts_with("/catalog/author/"));

    let detail = app.get(&url).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Author: Tolkien, John"));
    assert!(detail.body.contains("Jan 3, 1892 - Sep 2, 1973"));
    assert!(detail.body.contains("This author has no books."));
}

#[tokio::test]
async fn list_is_sorted_by_family_name() {
    let app = TestApp::new();
    app.create_author("Isaac", "Asimov").await;
    app.create_author("Ben", "Bova").await;
    app.create_author("Ann", "Aguirre").await;

    let list = app.get("/catalog/authors").await.body;
    let aguirre = list.find("Aguirre").unwrap();
    let asimov = list.find("Asimov").unwrap();
    let bova = list.find("Bova").unwrap();
    assert!(aguirre < asimov && asimov < bova);
}

#[tokio::test]
async fn unknown_or_malformed_id_is_a_404_page() {
    let app = TestApp::new();

    let missing = app
        .get("/catalog/author/7b0f5c9e-4a36-4a8e-9a57-1b7e3b2f2b10")
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(missing.body.contains("Author not found"));
    assert!(missing.body.contains("<html"));

    let malformed = app.get("/catalog/author/not-an-id").await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
    assert!(malformed.body.contains("Author not found"));
}

#[tokio::test]
async fn update_keeps_the_same_document() {
    let app = TestApp::new();
    let url = app.create_author("Mary", "Shelley").await;

    let form = app.get(&format!("{}/update", url)).await;
    assert!(form.body.contains("value=\"Shelley\""));

    let updated = app
        .create(
            &format!("{}/update", url),
            "first_name=Mary&family_name=Wollstonecraft",
        )
        .await;
    assert_eq!(updated, url);
    assert!(app.get(&url).await.body.contains("Wollstonecraft, Mary"));
}

#[tokio::test]
async fn rejected_update_keeps_the_id_and_the_document() {
    let app = TestApp::new();
    let url = app.create_author("Mary", "Shelley").await;

    let page = app
        .post(&format!("{}/update", url), "first_name=&family_name=Shelley")
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("First name must be specified."));
    assert!(app.get(&url).await.body.contains("Shelley, Mary"));
}

#[tokio::test]
async fn updating_a_missing_author_is_a_404() {
    let app = TestApp::new();
    let page = app
        .post(
            "/catalog/author/7b0f5c9e-4a36-4a8e-9a57-1b7e3b2f2b10/update",
            "first_name=Mary&family_name=Shelley",
        )
        .await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn author_with_books_cannot_be_deleted() {
    let app = TestApp::new();
    let author = app.create_author("Frank", "Herbert").await;
    let book = app.create_book("Dune", &author, &[]).await;

    let confirm = app.get(&format!("{}/delete", author)).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("Delete the following books"));
    assert!(confirm.body.contains("Dune"));

    let refused = app.post(&format!("{}/delete", author), "").await;
    assert_eq!(refused.status, StatusCode::OK);
    assert!(refused.body.contains("Delete the following books"));
    assert_eq!(app.get(&author).await.status, StatusCode::OK);

    // once the book is gone the author can go too
    let gone = app.post(&format!("{}/delete", book), "").await;
    assert_eq!(gone.location.as_deref(), Some("/catalog/books"));

    let deleted = app
        .post(&format!("{}/delete", author), &format!("id={}", id_of(&author)))
        .await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(deleted.location.as_deref(), Some("/catalog/authors"));
    assert_eq!(app.get(&author).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_page_of_missing_author_redirects_to_list() {
    let app = TestApp::new();
    let page = app
        .get("/catalog/author/7b0f5c9e-4a36-4a8e-9a57-1b7e3b2f2b10/delete")
        .await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/catalog/authors"));
}
