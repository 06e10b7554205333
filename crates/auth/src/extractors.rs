//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::AuthBackend;
use crate::context::AuthSession;
use crate::error::AuthError;

/// Signed-in admin extractor.
///
/// Rejects requests without a valid session with 401 and a login hint.
#[derive(Debug)]
pub struct AdminUser(pub AuthSession);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        let session = backend.authenticate(&parts.headers)?;

        if !session.is_admin() {
            return Err(AuthError::InvalidToken);
        }

        Ok(AdminUser(session))
    }
}

/// Optional session extractor; never rejects.
#[derive(Debug)]
pub struct OptionalSession(pub Option<AuthSession>);

impl<S> FromRequestParts<S> for OptionalSession
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        Ok(OptionalSession(backend.get_session(&parts.headers)))
    }
}
