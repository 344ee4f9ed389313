//! Integration tests for the Lectern client against a loopback mock service

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use lectern_client::{ClientError, ContentClient};
use lectern_core::SelectedImages;
use serde_json::{json, Value};

/// Serve `app` on an ephemeral loopback port and return its base URL
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A well-formed book payload: 2 chapters of 3 and 1 paragraphs
fn sample_book() -> Value {
    json!({
        "title": "The Test Book",
        "book_summary": "A book used in tests.",
        "chapters": [
            {
                "num": 1,
                "title": "Chapter One",
                "paragraphs": ["p0", "p1", "p2"],
                "paragraph_summaries": ["s0", "s1", "s2"],
                "chapter_summary": "First chapter."
            },
            {
                "num": 2,
                "title": "Chapter Two",
                "paragraphs": ["p0"],
                "paragraph_summaries": ["s0"],
                "chapter_summary": "Second chapter."
            }
        ]
    })
}

#[tokio::test]
async fn test_list_books_preserves_order() {
    let app = Router::new().route(
        "/api/books",
        get(|| async { Json(json!({"books": ["abc", "def"]})) }),
    );
    let client = ContentClient::new(serve(app).await);

    let books = client.list_books().await.unwrap();
    assert_eq!(books, vec!["abc", "def"]);
}

#[tokio::test]
async fn test_list_books_non_2xx_is_retrieval_failure() {
    let app = Router::new().route(
        "/api/books",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = ContentClient::new(serve(app).await);

    let err = client.list_books().await.unwrap_err();
    assert!(err.is_retrieval());
    assert!(matches!(err, ClientError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_list_books_missing_envelope_key_is_malformed() {
    let app = Router::new().route(
        "/api/books",
        get(|| async { Json(json!({"titles": ["abc"]})) }),
    );
    let client = ContentClient::new(serve(app).await);

    let err = client.list_books().await.unwrap_err();
    assert!(matches!(err, ClientError::Malformed { .. }));
    assert!(!err.is_retrieval());
}

#[tokio::test]
async fn test_list_books_wrong_element_type_is_malformed() {
    let app = Router::new().route(
        "/api/books",
        get(|| async { Json(json!({"books": [1, 2, 3]})) }),
    );
    let client = ContentClient::new(serve(app).await);

    let err = client.list_books().await.unwrap_err();
    assert!(matches!(err, ClientError::Malformed { .. }));
}

#[tokio::test]
async fn test_get_book_unwraps_envelope() {
    let app = Router::new().route(
        "/api/books/:id",
        get(|| async { Json(json!({"book": sample_book()})) }),
    );
    let client = ContentClient::new(serve(app).await);

    let book = client.get_book("abc").await.unwrap();
    assert_eq!(book.title, "The Test Book");
    assert_eq!(book.chapters.len(), 2);
    assert_eq!(book.chapters[0].paragraphs.len(), 3);
    assert_eq!(book.chapters[0].paragraph_summaries.len(), 3);
    assert_eq!(book.chapters[1].num, 2);
}

#[tokio::test]
async fn test_get_book_unknown_id_is_not_found() {
    let app = Router::new().route("/api/books/:id", get(|| async { StatusCode::NOT_FOUND }));
    let client = ContentClient::new(serve(app).await);

    let err = client.get_book("missing").await.unwrap_err();
    match err {
        ClientError::NotFound { id } => assert_eq!(id, "missing"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_book_misaligned_summaries_is_malformed() {
    let app = Router::new().route(
        "/api/books/:id",
        get(|| async {
            Json(json!({"book": {
                "title": "Bad Book",
                "book_summary": "",
                "chapters": [{
                    "num": 1,
                    "title": "Chapter One",
                    "paragraphs": ["p0", "p1"],
                    "paragraph_summaries": ["s0"],
                    "chapter_summary": ""
                }]
            }}))
        }),
    );
    let client = ContentClient::new(serve(app).await);

    let err = client.get_book("abc").await.unwrap_err();
    assert!(matches!(err, ClientError::Malformed { .. }));
}

#[tokio::test]
async fn test_get_book_metadata() {
    let app = Router::new().route(
        "/api/books/:id/metadata",
        get(|| async { Json(json!({"title": "The Test Book", "creator": "A. Writer"})) }),
    );
    let client = ContentClient::new(serve(app).await);

    let metadata = client.get_book_metadata("abc").await.unwrap();
    assert_eq!(metadata.title, "The Test Book");
    assert_eq!(metadata.creator.as_deref(), Some("A. Writer"));
}

#[tokio::test]
async fn test_get_selected_images_parses_empty_record() {
    let app = Router::new().route(
        "/api/books/:id/images/selected",
        get(|| async {
            Json(json!({
                "bookSelectedId": null,
                "chapters": [
                    {"chapterSelectedId": null, "paragraphSelectedIds": [null, null, null]},
                    {"chapterSelectedId": null, "paragraphSelectedIds": [null]}
                ]
            }))
        }),
    );
    let client = ContentClient::new(serve(app).await);

    let state = client.get_selected_images("abc").await.unwrap();
    assert_eq!(state.book_selected_id, None);
    assert_eq!(state.chapters.len(), 2);
    assert_eq!(state.chapters[0].paragraph_selected_ids.len(), 3);
}

#[tokio::test]
async fn test_selected_images_reconcile_against_fetched_book() {
    // Selection record from an older ingest: only one chapter on file.
    let app = Router::new()
        .route(
            "/api/books/:id",
            get(|| async { Json(json!({"book": sample_book()})) }),
        )
        .route(
            "/api/books/:id/images/selected",
            get(|| async {
                Json(json!({
                    "bookSelectedId": 3,
                    "chapters": [
                        {"chapterSelectedId": 1, "paragraphSelectedIds": [0, null, 2]}
                    ]
                }))
            }),
        );
    let client = ContentClient::new(serve(app).await);

    let book = client.get_book("abc").await.unwrap();
    let stale = client.get_selected_images("abc").await.unwrap();
    let state = stale.reconcile(&book);

    assert_eq!(state.chapters.len(), book.chapters.len());
    assert_eq!(state.book_selected_id, Some(3));
    assert_eq!(state.chapters[0].chapter_selected_id, Some(1));
    assert_eq!(
        state.chapters[0].paragraph_selected_ids,
        vec![Some(0), None, Some(2)]
    );
    assert_eq!(state.chapters[1].chapter_selected_id, None);
    assert_eq!(state.chapters[1].paragraph_selected_ids, vec![None]);
}

#[tokio::test]
async fn test_invalid_json_body_is_malformed() {
    let app = Router::new().route("/api/books", get(|| async { "not json" }));
    let client = ContentClient::new(serve(app).await);

    let err = client.list_books().await.unwrap_err();
    assert!(matches!(err, ClientError::Malformed { .. }));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let app = Router::new().route(
        "/api/books",
        get(|| async { Json(json!({"books": []})) }),
    );
    let base = serve(app).await;
    let client = ContentClient::new(format!("{}/", base));

    let books = client.list_books().await.unwrap();
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    // Nothing listens on this port (bind then drop to reserve a dead one).
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ContentClient::new(format!("http://{}", addr));
    let err = client.list_books().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
    assert!(err.is_retrieval());
}

#[tokio::test]
async fn test_empty_for_mirrors_fetched_book() {
    let app = Router::new().route(
        "/api/books/:id",
        get(|| async { Json(json!({"book": sample_book()})) }),
    );
    let client = ContentClient::new(serve(app).await);

    let book = client.get_book("abc").await.unwrap();
    let state = SelectedImages::empty_for(&book);
    assert_eq!(state.chapters.len(), 2);
    assert!(state.chapters[1].paragraph_selected_ids.iter().all(Option::is_none));
}
