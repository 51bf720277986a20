use axum::http::StatusCode;

use crate::common::{id_of, TestApp};

#[tokio::test]
async fn repeated_genre_keys_tag_the_book_with_each_genre() {
    let app = TestApp::new();
    let author = app.create_author("Terry", "Pratchett").await;
    let fantasy = app.create_genre("Fantasy").await;
    let comedy = app.create_genre("Comedy").await;

    let book = app.create_book("Mort", &author, &[&fantasy, &comedy]).await;
    let detail = app.get(&book).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Title: Mort"));
    assert!(detail.body.contains("Pratchett, Terry"));
    assert!(detail.body.contains("Fantasy"));
    assert!(detail.body.contains("Comedy"));
    assert!(detail.body.contains("There are no copies of this book in the library."));

    // both genres list the book
    assert!(app.get(&fantasy).await.body.contains("Mort"));
    assert!(app.get(&comedy).await.body.contains("Mort"));
}

#[tokio::test]
async fn empty_fields_report_every_message_in_order() {
    let app = TestApp::new();
    let page = app
        .post("/catalog/book/create", "title=&author=&summary=&isbn=")
        .await;
    assert_eq!(page.status, StatusCode::OK);

    let messages = [
        "Title must not be empty.",
        "Author must not be empty.",
        "Summary must not be empty.",
        "ISBN must not be empty",
    ];
    let positions: Vec<_> = messages
        .iter()
        .map(|m| page.body.find(m).unwrap_or_else(|| panic!("missing {}", m)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn unknown_author_is_a_field_error() {
    let app = TestApp::new();
    let page = app
        .post(
            "/catalog/book/create",
            "title=Ghost&author=7b0f5c9e-4a36-4a8e-9a57-1b7e3b2f2b10&summary=s&isbn=1",
        )
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Author not found"));
    assert!(app.get("/catalog/books").await.body.contains("There are no books."));
}

#[tokio::test]
async fn title_is_stored_escaped_and_shown_once_escaped() {
    let app = TestApp::new();
    let author = app.create_author("Jane", "Austen").await;
    let url = app
        .create(
            "/catalog/book/create",
            &format!(
                "title=++Pride+%26+Prejudice+&author={}&summary=%3Cb%3Ebold%3C%2Fb%3E&isbn=9780141439518",
                id_of(&author)
            ),
        )
        .await;

    let detail = app.get(&url).await.body;
    assert!(detail.contains("Title: Pride &amp; Prejudice"));
    assert!(detail.contains("&lt;b&gt;bold&lt;&#x2F;b&gt;"));
    assert!(!detail.contains("<b>bold"));
}

#[tokio::test]
async fn update_form_preselects_author_and_genres() {
    let app = TestApp::new();
    let author = app.create_author("Ursula", "LeGuin").await;
    let genre = app.create_genre("Fantasy").await;
    let book = app.create_book("Earthsea", &author, &[&genre]).await;

    let form = app.get(&format!("{}/update", book)).await.body;
    assert!(form.contains(&format!("value=\"{}\" selected", id_of(&author))));
    assert!(form.contains(&format!("value=\"{}\" checked", id_of(&genre))));
}

#[tokio::test]
async fn list_shows_titles_with_authors() {
    let app = TestApp::new();
    let author = app.create_author("Iain", "Banks").await;
    app.create_book("Excession", &author, &[]).await;
    app.create_book("Consider", &author, &[]).await;

    let list = app.get("/catalog/books").await.body;
    let consider = list.find("Consider").unwrap();
    let excession = list.find("Excession").unwrap();
    assert!(consider < excession);
    assert!(list.contains("(Banks, Iain)"));
}

#[tokio::test]
async fn book_with_copies_cannot_be_deleted() {
    let app = TestApp::new();
    let author = app.create_author("Ray", "Bradbury").await;
    let book = app.create_book("Fahrenheit", &author, &[]).await;
    app.create(
        "/catalog/bookinstance/create",
        &format!("book={}&imprint=Ballantine&status=Available", id_of(&book)),
    )
    .await;

    let refused = app.post(&format!("{}/delete", book), "").await;
    assert_eq!(refused.status, StatusCode::OK);
    assert!(refused.body.contains("Delete the following copies"));
    assert_eq!(app.get(&book).await.status, StatusCode::OK);
}

#[tokio::test]
async fn repeated_genre_key_tags_the_genre_once() {
    let app = TestApp::new();
    let author = app.create_author("Neil", "Gaiman").await;
    let fantasy = app.create_genre("Fantasy").await;

    let book = app
        .create_book("Stardust", &author, &[&fantasy, &fantasy])
        .await;
    let stored = app.catalog.book_detail(id_of(&book).parse().unwrap()).await.unwrap();
    assert_eq!(stored.book.genre.len(), 1);
}
