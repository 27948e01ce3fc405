//! Integration tests for outreach-desk API endpoints

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

/// Test helper: create test app with in-memory database and temp root
async fn create_test_app() -> (axum::Router, tempfile::TempDir) {
    let pool = sqlx::SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    outreach_common::db::init_tables(&pool)
        .await
        .expect("Failed to initialize database schema");

    let root = tempfile::tempdir().expect("Failed to create temp root folder");
    let state = outreach_desk::AppState::new(pool, root.path().to_path_buf());
    let app = outreach_desk::build_router(state);

    (app, root)
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _root) = create_test_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "outreach-desk");
}

#[tokio::test]
async fn test_root_page_serves_html() {
    let (app, _root) = create_test_app().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("Outreach Desk"));
    // Footer version comes from the crate manifest, never a literal
    assert!(text.contains(&format!("outreach-desk v{}", env!("CARGO_PKG_VERSION"))));
}

#[tokio::test]
async fn test_analyze_without_data_is_rejected() {
    let (app, _root) = create_test_app().await;

    let response = app
        .oneshot(post_json("/api/analyze", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_ingest_with_no_paths_is_rejected() {
    let (app, _root) = create_test_app().await;

    let response = app
        .oneshot(post_json("/api/ingest", json!({ "paths": [] })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ingest_with_undecodable_file_is_a_workbook_error() {
    let (app, root) = create_test_app().await;

    let bad_path = root.path().join("not-a-workbook.xlsx");
    std::fs::write(&bad_path, b"definitely not a spreadsheet").unwrap();

    let response = app
        .oneshot(post_json(
            "/api/ingest",
            json!({ "paths": [bad_path.to_string_lossy()] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "WORKBOOK_ERROR");
}

#[tokio::test]
async fn test_ingest_failure_leaves_session_empty() {
    let (app, root) = create_test_app().await;

    let bad_path = root.path().join("bad.xlsx");
    std::fs::write(&bad_path, b"garbage").unwrap();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/ingest",
            json!({ "paths": [bad_path.to_string_lossy()] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was admitted: analyze still reports no data
    let response = app
        .oneshot(post_json("/api/analyze", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_letter_with_empty_selection_is_rejected() {
    let (app, _root) = create_test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/letter",
            json!({ "selected": [], "segment": "biotech" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_letter_with_out_of_range_index_is_rejected() {
    let (app, _root) = create_test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/letter",
            json!({ "selected": [7], "segment": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_followup_roundtrip_via_api() {
    let (app, _root) = create_test_app().await;

    // Empty ledger initially
    let response = app.clone().oneshot(get("/api/followups")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["records"].as_array().unwrap().len(), 0);

    // Save one record
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/followups",
            json!({
                "customer_name": "Kim",
                "reaction": "positive",
                "next_date": "2026-04-01",
                "memo": "send TOC"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["records"].as_array().unwrap().len(), 1);
    assert_eq!(json["records"][0]["customer_name"], "Kim");

    // Second save prepends
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/followups",
            json!({ "customer_name": "Lee", "reaction": "call back" }),
        ))
        .await
        .unwrap();
    let json = json_body(response).await;
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["customer_name"], "Lee");
    assert_eq!(records[1]["customer_name"], "Kim");

    // Ledger persists across requests
    let response = app.oneshot(get("/api/followups")).await.unwrap();
    let json = json_body(response).await;
    assert_eq!(json["records"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_followup_with_missing_reaction_is_rejected_and_not_stored() {
    let (app, _root) = create_test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/followups",
            json!({ "customer_name": "Kim", "reaction": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/followups")).await.unwrap();
    let json = json_body(response).await;
    assert_eq!(json["records"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_guide_template_missing_is_404() {
    let (app, _root) = create_test_app().await;

    let response = app.oneshot(get("/api/guide-template")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_guide_template_unreadable_is_not_reported_as_missing() {
    let (app, root) = create_test_app().await;

    // A directory at the template path fails to read with something other
    // than NotFound; that must not masquerade as "not installed"
    let template_path = outreach_common::config::guide_template_path(root.path());
    std::fs::create_dir(&template_path).unwrap();

    let response = app.oneshot(get("/api/guide-template")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "IO_ERROR");
}

#[tokio::test]
async fn test_guide_template_download_headers() {
    let (app, root) = create_test_app().await;

    let template_path = outreach_common::config::guide_template_path(root.path());
    std::fs::write(&template_path, b"PK\x03\x04fake docx bytes").unwrap();

    let response = app.oneshot(get("/api/guide-template")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("wordprocessingml.document"));

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.contains("guide-template.docx"));
}
