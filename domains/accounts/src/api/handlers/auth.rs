//! Admin session handlers
//!
//! Implements:
//! - POST /api/auth/sign-in — Exchange admin credentials for a session
//! - POST /api/auth/sign-out — Clear the session cookie
//! - GET /api/auth/session — Return the current session

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use folio_auth::{
    clear_session_cookie, session_cookie, AdminUser, AuthError, AuthSession, OptionalSession,
    SessionInfo, SessionUser,
};
use folio_common::ValidatedJson;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::AccountsState;

#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: SessionUser,
    pub session: SessionInfo,
}

/// Sign in as the configured admin
///
/// **POST /api/auth/sign-in**
///
/// Returns the token in the body and sets it as an HTTP-only cookie.
pub async fn sign_in(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<SignInRequest>,
) -> Result<impl IntoResponse, AuthError> {
    let issued = state
        .auth
        .sign_in(&request.email, &request.password, Utc::now())?;

    let cookie = session_cookie(
        &issued.token,
        state.auth.config().session_ttl_seconds,
        state.secure_cookies,
    );

    let body = SignInResponse {
        token: issued.token,
        user: issued.session.user,
        session: issued.session.session,
    };

    Ok(([(SET_COOKIE, cookie)], Json(body)))
}

/// Sign out
///
/// **POST /api/auth/sign-out**
///
/// Always succeeds; signing out without a session just clears the cookie.
pub async fn sign_out(OptionalSession(session): OptionalSession) -> impl IntoResponse {
    if let Some(session) = session {
        tracing::info!(session_id = %session.session.id, "Admin signed out");
    }

    (StatusCode::NO_CONTENT, [(SET_COOKIE, clear_session_cookie())])
}

/// Current session
///
/// **GET /api/auth/session**
pub async fn get_session(AdminUser(session): AdminUser) -> Json<AuthSession> {
    Json(session)
}
