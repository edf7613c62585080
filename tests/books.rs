use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bookstore::{
    error::ErrorVerbosity, repository::InMemoryBookRepository, server, state::ApiState,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let repository = Arc::new(InMemoryBookRepository::new());

    server::app(ApiState::new(ErrorVerbosity::Full, repository))
}

fn test_book() -> Value {
    json!({
        "isbn": "1234567891",
        "amazon_url": "http://test.test",
        "author": "Test Test",
        "language": "english",
        "pages": 222,
        "publisher": "Testing Publisher",
        "title": "Learn How to Test",
        "year": 2023
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).expect("Body is serializable")))
            .expect("Request is valid"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Request is valid"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request is handled");

    let status = response.status();

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body is readable")
        .to_bytes();

    let body = match bytes.is_empty() {
        true => Value::Null,
        false => serde_json::from_slice(&bytes).expect("Body is JSON"),
    };

    (status, body)
}

async fn seed(app: &Router) {
    let (status, _) = send(app, Method::POST, "/books", Some(&test_book())).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn get_books_lists_all_books() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, Method::GET, "/books", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "books": [test_book()] }));
}

#[tokio::test]
async fn get_books_on_an_empty_table_returns_an_empty_list() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/books", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "books": [] }));
}

#[tokio::test]
async fn get_book_returns_the_book_by_isbn() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, Method::GET, "/books/1234567891", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "book": test_book() }));
}

#[tokio::test]
async fn get_book_with_unknown_isbn_is_not_found() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, Method::GET, "/books/222222222", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "There is no book with an isbn '222222222'");
}

#[tokio::test]
async fn create_book_returns_the_stored_record() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/books", Some(&test_book())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "book": test_book() }));
}

#[tokio::test]
async fn create_book_with_a_duplicate_isbn_is_an_internal_error() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, Method::POST, "/books", Some(&test_book())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error_type"], "InternalServerError");
    assert_eq!(body["message"], "An internal server error has occurred");
}

#[tokio::test]
async fn create_book_with_an_empty_body_reports_every_missing_property() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/books", Some(&json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!([
            "instance requires property \"isbn\"",
            "instance requires property \"amazon_url\"",
            "instance requires property \"author\"",
            "instance requires property \"language\"",
            "instance requires property \"pages\"",
            "instance requires property \"publisher\"",
            "instance requires property \"title\"",
            "instance requires property \"year\""
        ])
    );
}

#[tokio::test]
async fn create_book_with_mistyped_fields_reports_the_type_mismatches() {
    let app = app();

    let mut payload = test_book();
    payload["pages"] = json!("222");
    payload["year"] = json!("2023");

    let (status, body) = send(&app, Method::POST, "/books", Some(&payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!([
            "instance.pages is not of a type(s) integer",
            "instance.year is not of a type(s) integer"
        ])
    );
}

#[tokio::test]
async fn create_book_with_a_malformed_body_is_a_body_error() {
    let app = app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/books")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .expect("Request is valid");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request is handled");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body is readable")
        .to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("Body is JSON");

    assert_eq!(body["error_type"], "Body");
    assert_eq!(body["message"], "Failed to parse request body");
}

#[tokio::test]
async fn update_book_replaces_all_fields() {
    let app = app();
    seed(&app).await;

    let payload = json!({
        "isbn": "1234567891",
        "amazon_url": "http://a.co/eobPtX2",
        "author": "Matthew Lane",
        "language": "english",
        "pages": 264,
        "publisher": "Princeton University Press",
        "title": "Power-Up: Unlocking the Hidden Mathematics in Video Games",
        "year": 2017
    });

    let (status, body) = send(&app, Method::PUT, "/books/1234567891", Some(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "book": payload }));
}

#[tokio::test]
async fn update_book_with_an_empty_body_reports_every_missing_property() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, Method::PUT, "/books/1234567891", Some(&json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        json!([
            "instance requires property \"isbn\"",
            "instance requires property \"amazon_url\"",
            "instance requires property \"author\"",
            "instance requires property \"language\"",
            "instance requires property \"pages\"",
            "instance requires property \"publisher\"",
            "instance requires property \"title\"",
            "instance requires property \"year\""
        ])
    );
}

#[tokio::test]
async fn update_book_with_unknown_isbn_is_not_found() {
    let app = app();
    seed(&app).await;

    let (status, _) = send(&app, Method::PUT, "/books/222222222", Some(&test_book())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_book_removes_the_record() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/books/1234567891", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Book deleted" }));

    let (status, body) = send(&app, Method::GET, "/books", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "books": [] }));
}

#[tokio::test]
async fn delete_book_with_unknown_isbn_is_not_found() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, Method::DELETE, "/books/222222222", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "There is no book with an isbn '222222222'");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/authors", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "The requested resource was not found");
}

#[tokio::test]
async fn unsupported_method_is_method_not_allowed() {
    let app = app();

    let (status, body) = send(&app, Method::PATCH, "/books", Some(&test_book())).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "Method not allowed");
}
