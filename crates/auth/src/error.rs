//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Where unauthenticated admin clients are sent to sign in
pub const LOGIN_PATH: &str = "/admin/login";

/// Authentication error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    MissingSession,
    InvalidAuthorizationFormat,
    InvalidToken,
    InvalidCredentials,
    SignInDisabled,
    TokenIssueFailed,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::SignInDisabled => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::TokenIssueFailed => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message) = match self {
            AuthError::MissingSession => ("MISSING_SESSION", "Sign in required"),
            AuthError::InvalidAuthorizationFormat => (
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => ("INVALID_SESSION", "Invalid or expired session"),
            AuthError::InvalidCredentials => ("INVALID_CREDENTIALS", "Invalid email or password"),
            AuthError::SignInDisabled => (
                "SIGN_IN_DISABLED",
                "No admin account is configured for this site",
            ),
            AuthError::TokenIssueFailed => ("AUTH_ERROR", "Failed to create session"),
        };

        let body = if status == StatusCode::UNAUTHORIZED {
            json!({
                "error": {
                    "code": code,
                    "message": message,
                    "login": LOGIN_PATH,
                }
            })
        } else {
            json!({
                "error": {
                    "code": code,
                    "message": message,
                }
            })
        };

        (status, Json(body)).into_response()
    }
}
