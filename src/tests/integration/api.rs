//! HTTP API Tests
//!
//! Drives the axum router in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::core::api::{router, BANNER};
use crate::core::resolver::WordResolver;
use crate::database::Database;
use crate::tests::common::{create_seeded_db, create_test_db, CannedSource};

fn app(db: Database) -> Router {
    router(Arc::new(
        WordResolver::builder(Arc::new(db))
            .add_source(CannedSource::silent("Wiktionary"))
            .build(),
    ))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_banner_and_health() {
    let (db, _temp) = create_test_db().await;

    let (status, body) = send(app(db.clone()), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), BANNER);

    let (status, body) = send_json(app(db), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_resolve_local_entry() {
    let (db, _temp) = create_seeded_db(&[("அறம்", "virtue")]).await;

    let (status, body) = send_json(
        app(db),
        Method::POST,
        "/resolve",
        Some(json!({ "query": "அறம்" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "outcome": "resolved",
            "lemma": "அறம்",
            "body": "virtue",
            "originatingSource": "LocalStore"
        })
    );
}

#[tokio::test]
async fn test_resolve_unknown_word() {
    let (db, _temp) = create_test_db().await;
    let (status, body) = send_json(
        app(db),
        Method::POST,
        "/resolve",
        Some(json!({ "query": "புதியசொல்" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "outcome": "choose", "candidates": ["புதியசொல்"] }));
}

#[tokio::test]
async fn test_resolve_with_every_source_down_is_503() {
    let (db, _temp) = create_test_db().await;
    db.close().await;
    let app = router(Arc::new(WordResolver::builder(Arc::new(db)).build()));

    let (status, body) = send_json(app, Method::POST, "/resolve", Some(json!({ "query": "அறம்" }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["outcome"], "error");
}

#[tokio::test]
async fn test_suggest_endpoint() {
    let (db, _temp) = create_test_db().await;
    let (status, body) = send_json(app(db), Method::GET, "/suggest?q=virtue", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "outcome": "choose", "candidates": ["அறம்"] }));
}

#[tokio::test]
async fn test_finalize_endpoint() {
    let (db, _temp) = create_test_db().await;

    let (status, body) = send_json(
        app(db.clone()),
        Method::POST,
        "/finalize",
        Some(json!({ "lemma": "கடல்", "body": "sea" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lemma"], "கடல்");
    assert_eq!(body["body"], "sea");

    let (status, body) = send_json(
        app(db),
        Method::POST,
        "/finalize",
        Some(json!({ "lemma": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_word_of_the_day_endpoint() {
    let (db, _temp) = create_test_db().await;

    let (status, body) = send_json(app(db.clone()), Method::GET, "/word-of-the-day", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let app = app(db);
    for term in ["மழை", "மழை", "அறம்"] {
        send(app.clone(), Method::POST, "/resolve", Some(json!({ "query": term }))).await;
    }

    let (_, body) = send_json(app, Method::GET, "/word-of-the-day", None).await;
    assert_eq!(body, json!({ "term": "மழை", "count": 2 }));
}

#[tokio::test]
async fn test_stats_endpoint() {
    let (db, _temp) = create_test_db().await;
    let app = app(db);

    send(app.clone(), Method::POST, "/resolve", Some(json!({ "query": "அறம்" }))).await;

    let (status, body) = send_json(app, Method::GET, "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["LocalStore"]["total_requests"], 1);
    assert_eq!(body["Wiktionary"]["absent"], 1);
}

async fn send_raw(app: Router, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_resolve_rejects_non_json_body_with_outcome() {
    let (db, _temp) = create_test_db().await;

    let (status, body) = send_raw(app(db), "/resolve", "text/plain", "அறம்").await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["outcome"], "error");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_resolve_rejects_mistyped_query_with_outcome() {
    let (db, _temp) = create_test_db().await;

    let (status, body) = send_raw(app(db.clone()), "/resolve", "application/json", r#"{"query": 5}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["outcome"], "error");

    let (status, body) = send_raw(app(db), "/resolve", "application/json", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["outcome"], "error");
}

#[tokio::test]
async fn test_finalize_rejects_malformed_body_as_json_error() {
    let (db, _temp) = create_test_db().await;

    let (status, body) = send_raw(app(db), "/finalize", "application/json", r#"{"lemma": []}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}
