//! Public gallery endpoint tests

use axum::http::StatusCode;
use folio_projects::ProjectStore;
use uuid::Uuid;

use crate::common::TestApp;

fn slugs(body: &serde_json::Value) -> Vec<String> {
    body["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_gallery_lists_published_projects_in_order() {
    let app = TestApp::new();

    let response = app.get("/api/gallery").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["filter"], "all");
    assert_eq!(
        slugs(&response.body),
        vec![
            "aurora-study",
            "mountain-dawn",
            "silent-observer",
            "winter-solstice",
            "ethereal-light",
            "frozen-lake"
        ]
    );

    let first = &response.body["projects"][0];
    assert_eq!(first["type"], "process");
    assert_eq!(first["hasVideo"], true);
    assert_eq!(first["thumbnail"], "/aurora-study.jpg");
}

#[tokio::test]
async fn test_gallery_filters_by_category() {
    let app = TestApp::new();

    let process = app.get("/api/gallery?filter=process").await;
    assert_eq!(process.status, StatusCode::OK);
    assert_eq!(
        slugs(&process.body),
        vec!["aurora-study", "silent-observer", "frozen-lake"]
    );

    let landscape = app.get("/api/gallery?filter=landscape").await;
    assert_eq!(
        slugs(&landscape.body),
        vec!["mountain-dawn", "winter-solstice", "frozen-lake"]
    );

    let unknown = app.get("/api/gallery?filter=sculpture").await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert!(slugs(&unknown.body).is_empty());
}

#[tokio::test]
async fn test_gallery_hides_drafts() {
    let app = TestApp::new();
    let mut draft = app
        .store
        .find(Uuid::from_u128(2))
        .await
        .unwrap()
        .unwrap();
    draft.published = false;
    app.store.replace(draft).await.unwrap();

    let list = app.get("/api/gallery").await;
    assert!(!slugs(&list.body).contains(&"mountain-dawn".to_string()));

    let detail = app.get("/api/gallery/mountain-dawn").await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);

    // Neighbours skip the draft
    let aurora = app.get("/api/gallery/aurora-study").await;
    assert_eq!(aurora.body["next"]["slug"], "silent-observer");
}

#[tokio::test]
async fn test_gallery_detail_for_process_project() {
    let app = TestApp::new();

    let response = app.get("/api/gallery/aurora-study").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;
    assert_eq!(body["title"], "Aurora Study");
    assert_eq!(body["type"], "process");
    assert_eq!(body["processStages"].as_array().unwrap().len(), 4);
    assert_eq!(body["video"]["provider"], "youtube");
    assert_eq!(
        body["video"]["embedUrl"],
        "https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0"
    );
    assert_eq!(body["video"]["markers"][1]["label"], "Line Work");
    assert_eq!(body["video"]["markers"][1]["time"], "0:38");
    assert!(body["previous"].is_null());
    assert_eq!(body["next"]["slug"], "mountain-dawn");
    assert_eq!(body["next"]["title"], "Mountain Dawn");
}

#[tokio::test]
async fn test_gallery_detail_for_last_project() {
    let app = TestApp::new();

    let response = app.get("/api/gallery/frozen-lake").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["previous"]["slug"], "ethereal-light");
    assert!(response.body["next"].is_null());
}

#[tokio::test]
async fn test_gallery_detail_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/gallery/no-such-piece").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
    assert!(response.error_message().contains("Project 'no-such-piece' not found"));
}

#[tokio::test]
async fn test_gallery_on_empty_store() {
    let app = TestApp::empty();

    let response = app.get("/api/gallery").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(slugs(&response.body).is_empty());
}

#[tokio::test]
async fn test_gallery_categories() {
    let app = TestApp::new();

    let response = app.get("/api/gallery/categories").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["categories"],
        serde_json::json!(["all", "portrait", "landscape", "process"])
    );
}
