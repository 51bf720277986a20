use axum::http::StatusCode;

use locallibrary::models::Genre;

use crate::common::TestApp;

#[tokio::test]
async fn name_must_be_longer_than_three_and_shorter_than_a_hundred() {
    let app = TestApp::new();
    let too_long = "x".repeat(100);
    let longest = "x".repeat(99);

    for rejected in ["ab", "abc", too_long.as_str()] {
        let page = app
            .post("/catalog/genre/create", &format!("name={}", rejected))
            .await;
        assert_eq!(page.status, StatusCode::OK, "{} was accepted", rejected);
        assert!(page.body.contains("The length of the name should be over 3 and below 100."));
    }
    let short = app.post("/catalog/genre/create", "name=ab").await;
    assert!(short.body.contains("Genre name must contain at least 3 characters"));

    for accepted in ["abcd", longest.as_str()] {
        app.create_genre(accepted).await;
    }
    assert_eq!(app.catalog.list::<Genre>().await.unwrap().len(), 2);
}

#[tokio::test]
async fn length_is_measured_after_trimming() {
    let app = TestApp::new();
    let page = app.post("/catalog/genre/create", "name=++abc++").await;
    assert_eq!(page.status, StatusCode::OK);
}

#[tokio::test]
async fn duplicate_name_redirects_to_the_existing_genre() {
    let app = TestApp::new();
    let first = app.create_genre("Fantasy").await;
    let second = app.create_genre("Fantasy").await;
    assert_eq!(first, second);

    let list = app.get("/catalog/genres").await.body;
    assert_eq!(list.matches("Fantasy").count(), 1);
}

#[tokio::test]
async fn escaped_name_round_trips_without_double_escaping() {
    let app = TestApp::new();
    let url = app.create_genre("Horror+%26+Gothic").await;
    let detail = app.get(&url).await.body;
    assert!(detail.contains("Genre: Horror &amp; Gothic"));
    assert!(!detail.contains("&amp;amp;"));
}

#[tokio::test]
async fn detail_lists_books_in_genre() {
    let app = TestApp::new();
    let genre = app.create_genre("Poetry").await;
    let author = app.create_author("Emily", "Dickinson").await;
    app.create_book("Poems", &author, &[&genre]).await;

    let detail = app.get(&genre).await.body;
    assert!(detail.contains("Poems"));
}

#[tokio::test]
async fn genre_in_use_cannot_be_deleted() {
    let app = TestApp::new();
    let genre = app.create_genre("Satire").await;
    let author = app.create_author("Jonathan", "Swift").await;
    app.create_book("Gulliver", &author, &[&genre]).await;

    let refused = app.post(&format!("{}/delete", genre), "").await;
    assert_eq!(refused.status, StatusCode::OK);
    assert!(refused.body.contains("Delete the following books"));

    let unused = app.create_genre("Western").await;
    let deleted = app.post(&format!("{}/delete", unused), "").await;
    assert_eq!(deleted.location.as_deref(), Some("/catalog/genres"));
}
