//! Route definitions for Accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::auth;
use super::middleware::AccountsState;

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/auth/sign-in", post(auth::sign_in))
        .route("/api/auth/sign-out", post(auth::sign_out))
        .route("/api/auth/session", get(auth::get_session))
}
