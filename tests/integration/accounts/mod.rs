//! Admin sign-in and session endpoint tests

use axum::http::{header::SET_COOKIE, Method, StatusCode};
use serde_json::json;

use crate::common::{
    cookie_request, create_test_jwt, json_request, TestApp, ADMIN_EMAIL, ADMIN_PASSWORD,
    TEST_SECRET,
};

fn set_cookie(response: &crate::common::TestResponse) -> String {
    response
        .headers
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_sign_in_sets_session_cookie() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/sign-in",
            Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
            None,
        ))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], ADMIN_EMAIL);
    assert_eq!(response.body["user"]["role"], "admin");

    let token = response.body["token"].as_str().unwrap();
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with(&format!("folio_session={};", token)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=3600"));
    assert!(!cookie.contains("Secure"));

    // The cookie alone authenticates admin routes
    let projects = app
        .send(cookie_request(
            Method::GET,
            "/api/projects",
            &format!("folio_session={}", token),
        ))
        .await;
    assert_eq!(projects.status, StatusCode::OK);
}

#[tokio::test]
async fn test_sign_in_email_is_case_insensitive() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/sign-in",
            Some(json!({ "email": "Artist@Example.COM", "password": ADMIN_PASSWORD })),
            None,
        ))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_sign_in_rejects_bad_credentials() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/sign-in",
            Some(json!({ "email": ADMIN_EMAIL, "password": "wrong" })),
            None,
        ))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "INVALID_CREDENTIALS");
    assert!(response.headers.get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_sign_in_validates_body() {
    let app = TestApp::new();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/sign-in",
            Some(json!({ "email": "not-an-email", "password": "" })),
            None,
        ))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let fields = &response.body["error"]["fields"];
    assert!(fields.get("email").is_some());
    assert!(fields.get("password").is_some());
}

#[tokio::test]
async fn test_sign_in_disabled_without_admin() {
    let app = TestApp::without_admin();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/sign-in",
            Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
            None,
        ))
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.error_code(), "SIGN_IN_DISABLED");
}

#[tokio::test]
async fn test_sign_out_clears_cookie() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .send(json_request(
            Method::POST,
            "/api/auth/sign-out",
            None,
            Some(&token),
        ))
        .await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(set_cookie(&response).starts_with("folio_session=;"));
    assert!(set_cookie(&response).contains("Max-Age=0"));

    // Signing out without a session still succeeds
    let anonymous = app
        .send(json_request(Method::POST, "/api/auth/sign-out", None, None))
        .await;
    assert_eq!(anonymous.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_get_session() {
    let app = TestApp::new();

    let response = app.admin(Method::GET, "/api/auth/session", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], ADMIN_EMAIL);
    assert!(response.body["session"]["id"].is_string());

    let anonymous = app.get("/api/auth/session").await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.error_code(), "MISSING_SESSION");
}

#[tokio::test]
async fn test_rejects_expired_and_forged_tokens() {
    let app = TestApp::new();

    let expired = create_test_jwt(TEST_SECRET, "admin", -3600);
    let forged = create_test_jwt("some-other-secret", "admin", 3600);
    let wrong_role = create_test_jwt(TEST_SECRET, "viewer", 3600);

    for token in [expired, forged, wrong_role] {
        let response = app
            .send(json_request(
                Method::GET,
                "/api/auth/session",
                None,
                Some(&token),
            ))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error_code(), "INVALID_SESSION");
    }

    let valid = create_test_jwt(TEST_SECRET, "admin", 3600);
    let response = app
        .send(json_request(
            Method::GET,
            "/api/auth/session",
            None,
            Some(&valid),
        ))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
