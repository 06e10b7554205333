//! Admin project management endpoint tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::{json_request, process_form, single_form, TestApp};

#[tokio::test]
async fn test_admin_routes_require_session() {
    let app = TestApp::new();

    for uri in ["/api/projects", "/api/projects/stats"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(response.error_code(), "MISSING_SESSION");
        assert_eq!(response.body["error"]["login"], "/admin/login");
    }

    let create = app
        .send(json_request(
            Method::POST,
            "/api/projects",
            Some(single_form("Nope", "nope")),
            None,
        ))
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.len().await, 6);
}

#[tokio::test]
async fn test_list_projects_defaults() {
    let app = TestApp::new();

    let response = app.admin(Method::GET, "/api/projects", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 6);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["totalPages"], 1);

    let first = &response.body["projects"][0];
    assert_eq!(first["slug"], "aurora-study");
    assert_eq!(first["status"], "published");
    assert_eq!(first["hasVideo"], true);
}

#[tokio::test]
async fn test_list_projects_search_and_type() {
    let app = TestApp::new();

    let search = app
        .admin(Method::GET, "/api/projects?search=LAKE", None)
        .await;
    assert_eq!(search.body["total"], 1);
    assert_eq!(search.body["projects"][0]["slug"], "frozen-lake");

    let singles = app
        .admin(Method::GET, "/api/projects?type=single", None)
        .await;
    assert_eq!(singles.body["total"], 3);

    let drafts = app
        .admin(Method::GET, "/api/projects?status=draft", None)
        .await;
    assert_eq!(drafts.body["total"], 0);
    assert_eq!(drafts.body["totalPages"], 0);
}

#[tokio::test]
async fn test_list_projects_pagination() {
    let app = TestApp::new();

    let response = app
        .admin(Method::GET, "/api/projects?page=2&limit=4", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 6);
    assert_eq!(response.body["page"], 2);
    assert_eq!(response.body["totalPages"], 2);

    let slugs: Vec<&str> = response.body["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["ethereal-light", "frozen-lake"]);
}

#[tokio::test]
async fn test_list_projects_rejects_unknown_filter() {
    let app = TestApp::new();

    let response = app
        .admin(Method::GET, "/api/projects?status=archived", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_project_stats() {
    let app = TestApp::new();
    app.admin(
        Method::POST,
        "/api/projects",
        Some(process_form("Dune Study", "dune-study")),
    )
    .await;

    let response = app.admin(Method::GET, "/api/projects/stats", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "total": 7,
            "published": 6,
            "drafts": 1,
            "process": 4,
            "withVideo": 4,
        })
    );
}

#[tokio::test]
async fn test_create_single_project() {
    let app = TestApp::empty();

    let created = app
        .admin(
            Method::POST,
            "/api/projects",
            Some(single_form("Quiet Hour", "quiet-hour")),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["type"], "single");
    assert_eq!(created.body["featuredImage"], "/uploads/featured.png");
    assert_eq!(created.body["status"], "published");
    assert_eq!(created.body["hasVideo"], false);

    let id = created.body["id"].as_str().unwrap();
    let fetched = app
        .admin(Method::GET, &format!("/api/projects/{}", id), None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["title"], "Quiet Hour");

    let gallery = app.get("/api/gallery/quiet-hour").await;
    assert_eq!(gallery.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_process_project_derives_video_markers() {
    let app = TestApp::empty();

    let created = app
        .admin(
            Method::POST,
            "/api/projects",
            Some(process_form("Dune Study", "dune-study")),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    let body = &created.body;
    assert_eq!(body["type"], "process");
    assert_eq!(body["status"], "draft");
    assert_eq!(body["video"]["videoId"], "dQw4w9WgXcQ");
    assert_eq!(
        body["video"]["timestamps"],
        json!([
            { "label": "Sketch", "timestamp": 0 },
            { "label": "Color", "timestamp": 60 },
            { "label": "Final", "timestamp": 120 },
        ])
    );
    assert!(body["processStages"][1].get("caption").is_none());
    assert_eq!(body["processStages"][2]["caption"], "Done");

    // Drafts stay out of the public gallery
    let gallery = app.get("/api/gallery/dune-study").await;
    assert_eq!(gallery.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_reports_every_invalid_field() {
    let app = TestApp::empty();
    let mut form = process_form("", "");
    form["year"] = json!(1800);
    form["processStages"][1]["id"] = json!("stage-a");
    form["processStages"][2]["name"] = json!("  ");

    let response = app
        .admin(Method::POST, "/api/projects", Some(form))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
    let fields = &response.body["error"]["fields"];
    assert_eq!(fields["title"][0], "Title is required");
    assert_eq!(fields["slug"][0], "Slug is required");
    assert!(fields["year"][0]
        .as_str()
        .unwrap()
        .starts_with("Year must be between 1900 and "));
    assert_eq!(fields["processStages[1].id"][0], "Stage id must be unique");
    assert!(fields.get("processStages[2].name").is_some());
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_create_process_without_stages() {
    let app = TestApp::empty();
    let mut form = process_form("Empty Process", "empty-process");
    form["processStages"] = json!([]);

    let response = app
        .admin(Method::POST, "/api/projects", Some(form))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"]["fields"]["processStages"][0],
        "At least one stage is required"
    );
}

#[tokio::test]
async fn test_create_rejects_mux_video() {
    let app = TestApp::empty();
    let mut form = process_form("Streamed", "streamed");
    form["video"] = json!({ "provider": "mux", "videoId": "abc123" });

    let response = app
        .admin(Method::POST, "/api/projects", Some(form))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"]["fields"].get("video.provider").is_some());
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let app = TestApp::empty();

    let response = app
        .admin(
            Method::POST,
            "/api/projects",
            Some(json!({ "title": "No year", "type": "single" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_duplicate_slug_conflicts() {
    let app = TestApp::new();

    let response = app
        .admin(
            Method::POST,
            "/api/projects",
            Some(single_form("Another Aurora", "aurora-study")),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");
    assert_eq!(app.store.len().await, 6);
}

#[tokio::test]
async fn test_get_unknown_project() {
    let app = TestApp::new();

    let response = app
        .admin(
            Method::GET,
            &format!("/api/projects/{}", Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let malformed = app
        .admin(Method::GET, "/api/projects/not-a-uuid", None)
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_replaces_project_and_releases_media() {
    let app = TestApp::empty();
    app.storage.insert("/uploads/featured.png", b"old");
    app.storage.insert("/uploads/replacement.png", b"new");

    let created = app
        .admin(
            Method::POST,
            "/api/projects",
            Some(single_form("Quiet Hour", "quiet-hour")),
        )
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let mut form = single_form("Quiet Hour (revised)", "quiet-hour");
    form["featuredImage"] = json!("/uploads/replacement.png");
    form["published"] = json!(false);

    let updated = app
        .admin(Method::PUT, &format!("/api/projects/{}", id), Some(form))
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], id.as_str());
    assert_eq!(updated.body["title"], "Quiet Hour (revised)");
    assert_eq!(updated.body["status"], "draft");
    assert_eq!(updated.body["createdAt"], created.body["createdAt"]);

    assert!(!app.storage.contains("/uploads/featured.png"));
    assert!(app.storage.contains("/uploads/replacement.png"));
}

#[tokio::test]
async fn test_update_to_taken_slug_conflicts() {
    let app = TestApp::new();
    let id = Uuid::from_u128(2);

    let response = app
        .admin(
            Method::PUT,
            &format!("/api/projects/{}", id),
            Some(single_form("Mountain Dawn", "aurora-study")),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_unknown_project() {
    let app = TestApp::new();

    let response = app
        .admin(
            Method::PUT,
            &format!("/api/projects/{}", Uuid::new_v4()),
            Some(single_form("Ghost", "ghost")),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_project_releases_owned_media_only() {
    let app = TestApp::empty();
    app.storage.insert("/uploads/a.png", b"a");
    app.storage.insert("/uploads/b.png", b"b");

    let mut form = process_form("Dune Study", "dune-study");
    form["processStages"][2]["image"] = json!("https://cdn.example.com/final.png");
    let created = app
        .admin(Method::POST, "/api/projects", Some(form))
        .await;
    let uri = format!("/api/projects/{}", created.body["id"].as_str().unwrap());

    let deleted = app.admin(Method::DELETE, &uri, None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(app.storage.is_empty());
    assert!(app.store.is_empty().await);

    let again = app.admin(Method::DELETE, &uri, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shared_media_survives_until_last_reference_goes() {
    let app = TestApp::empty();
    app.storage.insert("/uploads/featured.png", b"shared");

    let first = app
        .admin(Method::POST, "/api/projects", Some(single_form("First", "first")))
        .await;
    let second = app
        .admin(Method::POST, "/api/projects", Some(single_form("Second", "second")))
        .await;
    let first_uri = format!("/api/projects/{}", first.body["id"].as_str().unwrap());
    let second_uri = format!("/api/projects/{}", second.body["id"].as_str().unwrap());

    let deleted = app.admin(Method::DELETE, &first_uri, None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(app.storage.contains("/uploads/featured.png"));

    // Moving the remaining project off the image releases it
    let mut form = single_form("Second", "second");
    form["featuredImage"] = json!("https://cdn.example.com/second.png");
    let updated = app.admin(Method::PUT, &second_uri, Some(form)).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert!(!app.storage.contains("/uploads/featured.png"));
}

#[tokio::test]
async fn test_delete_sample_project_keeps_static_images() {
    let app = TestApp::new();
    app.storage.insert("/uploads/unrelated.png", b"x");

    let response = app
        .admin(
            Method::DELETE,
            &format!("/api/projects/{}", Uuid::from_u128(1)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.store.len().await, 5);
    assert!(app.storage.contains("/uploads/unrelated.png"));
}

#[tokio::test]
async fn test_generate_slug() {
    let app = TestApp::new();

    let response = app
        .admin(
            Method::POST,
            "/api/projects/slug",
            Some(json!({ "title": "  Dawn over the Alps, Part 2!  " })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["slug"], "dawn-over-the-alps-part-2");

    let empty = app
        .admin(Method::POST, "/api/projects/slug", Some(json!({ "title": "" })))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_resolve_video() {
    let app = TestApp::new();

    let youtube = app
        .admin(
            Method::POST,
            "/api/projects/video/resolve",
            Some(json!({
                "provider": "youtube",
                "input": "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42",
            })),
        )
        .await;
    assert_eq!(youtube.status, StatusCode::OK);
    assert_eq!(youtube.body["videoId"], "dQw4w9WgXcQ");
    assert_eq!(
        youtube.body["embedUrl"],
        "https://www.youtube.com/embed/dQw4w9WgXcQ"
    );

    let vimeo = app
        .admin(
            Method::POST,
            "/api/projects/video/resolve",
            Some(json!({ "provider": "vimeo", "input": "https://vimeo.com/76979871" })),
        )
        .await;
    assert_eq!(vimeo.body["videoId"], "76979871");
    assert_eq!(
        vimeo.body["embedUrl"],
        "https://player.vimeo.com/video/76979871"
    );
}
