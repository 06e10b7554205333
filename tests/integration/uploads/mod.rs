//! Upload endpoint tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{json_request, TestApp};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-data";

#[tokio::test]
async fn test_upload_image() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .upload("file", "Aurora Final.png", "image/png", PNG_BYTES, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let url = response.body["url"].as_str().unwrap();
    assert!(url.starts_with("/uploads/"));
    assert_eq!(response.body["filename"], "Aurora Final.png");
    assert_eq!(response.body["size"], PNG_BYTES.len());
    assert!(app.storage.contains(url));
}

#[tokio::test]
async fn test_upload_requires_session() {
    let app = TestApp::new();

    let response = app
        .upload("file", "a.png", "image/png", PNG_BYTES, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn test_upload_rejects_non_images() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .upload("file", "notes.pdf", "application/pdf", b"%PDF-1.7", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response
        .error_message()
        .contains("Only image files are allowed"));
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .upload("attachment", "a.png", "image/png", PNG_BYTES, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("No file provided"));
}

#[tokio::test]
async fn test_upload_empty_file() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .upload("file", "a.png", "image/png", b"", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.error_message().contains("No file provided"));
}

#[tokio::test]
async fn test_upload_too_large() {
    let app = TestApp::with_upload_limit(1024);
    let token = app.admin_token();
    let bytes = vec![0u8; 2048];

    let response = app
        .upload("file", "big.png", "image/png", &bytes, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.error_code(), "PAYLOAD_TOO_LARGE");
    assert!(response
        .error_message()
        .contains("File size must be less than 1024 bytes"));
    assert!(app.storage.is_empty());
}

#[tokio::test]
async fn test_delete_upload() {
    let app = TestApp::new();
    let token = app.admin_token();
    let uploaded = app
        .upload("file", "a.png", "image/png", PNG_BYTES, Some(&token))
        .await;
    let url = uploaded.body["url"].as_str().unwrap().to_string();

    let response = app
        .admin(Method::DELETE, "/api/upload", Some(json!({ "url": url })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert!(!app.storage.contains(&url));

    let again = app
        .admin(Method::DELETE, "/api/upload", Some(json!({ "url": url })))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_upload_rejects_foreign_and_missing_urls() {
    let app = TestApp::new();

    let foreign = app
        .admin(
            Method::DELETE,
            "/api/upload",
            Some(json!({ "url": "/aurora-study.jpg" })),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::BAD_REQUEST);

    let missing = app
        .admin(Method::DELETE, "/api/upload", Some(json!({})))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_upload_requires_session() {
    let app = TestApp::new();
    app.storage.insert("/uploads/keep.png", b"x");

    let response = app
        .send(json_request(
            Method::DELETE,
            "/api/upload",
            Some(json!({ "url": "/uploads/keep.png" })),
            None,
        ))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.storage.contains("/uploads/keep.png"));
}

#[tokio::test]
async fn test_disk_upload_is_served_from_prefix() {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use folio_app::{build_router, AppServices, PublicUploads};
    use folio_projects::InMemoryProjectStore;
    use folio_storage::LocalAssetStorage;
    use tower::ServiceExt;

    let dir = tempfile::tempdir().unwrap();
    let storage = LocalAssetStorage::new(dir.path().join("uploads"), "/uploads")
        .await
        .unwrap();
    let public_uploads = PublicUploads {
        prefix: storage.public_prefix().to_string(),
        dir: storage.root().to_path_buf(),
    };

    // Reuse the fixture's auth so its admin token is accepted
    let fixture = TestApp::new();
    let token = fixture.admin_token();
    let app = TestApp {
        router: build_router(AppServices {
            store: Arc::new(InMemoryProjectStore::new()),
            storage: Arc::new(storage),
            auth: fixture.auth.clone(),
            max_upload_bytes: 5 * 1024 * 1024,
            secure_cookies: false,
            public_uploads: Some(public_uploads),
        }),
        ..fixture
    };

    let uploaded = app
        .upload("file", "study.png", "image/png", PNG_BYTES, Some(&token))
        .await;
    assert_eq!(uploaded.status, StatusCode::OK);
    let url = uploaded.body["url"].as_str().unwrap().to_string();

    let served = app
        .router
        .clone()
        .oneshot(Request::builder().uri(&url).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(served.status(), StatusCode::OK);
    let bytes = to_bytes(served.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], PNG_BYTES);

    let deleted = app
        .admin(Method::DELETE, "/api/upload", Some(json!({ "url": url })))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(std::fs::read_dir(dir.path().join("uploads")).unwrap().count(), 0);
}
