//! Concrete authentication backend
//!
//! Wraps the `AuthConfig` and answers the one question the rest of the
//! service asks: is there a valid admin session on this request?

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{DateTime, Utc};
use folio_common::verify_secret_hash;

use crate::config::AuthConfig;
use crate::context::AuthSession;
use crate::error::AuthError;
use crate::jwt::{
    extract_bearer_token, extract_session_cookie, issue_session_token, validate_session_token,
};

/// A freshly minted session and its signed token
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: AuthSession,
}

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    config: Arc<AuthConfig>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Session on the request, if any. Never fails.
    pub fn get_session(&self, headers: &HeaderMap) -> Option<AuthSession> {
        self.authenticate(headers).ok()
    }

    /// Validate the session carried by a bearer token or the session cookie.
    ///
    /// An `Authorization` header takes precedence over the cookie.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<AuthSession, AuthError> {
        let token = match headers.get(AUTHORIZATION) {
            Some(header) => extract_bearer_token(header)?,
            None => extract_session_cookie(headers).ok_or(AuthError::MissingSession)?,
        };

        let claims = validate_session_token(&token, &self.config)?;
        AuthSession::from_claims(&claims)
    }

    /// Check admin credentials and mint a session.
    pub fn sign_in(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedSession, AuthError> {
        let admin = self.config.admin.as_ref().ok_or(AuthError::SignInDisabled)?;

        let email_matches = admin.email.eq_ignore_ascii_case(email.trim());
        let password_matches = verify_secret_hash(password, &admin.password_hash);
        if !(email_matches && password_matches) {
            tracing::warn!(email = %email, "Rejected admin sign-in");
            return Err(AuthError::InvalidCredentials);
        }

        let (token, claims) = issue_session_token(&self.config, &admin.email, now)?;
        let session = AuthSession::from_claims(&claims)?;

        tracing::info!(session_id = %session.session.id, "Admin signed in");
        Ok(IssuedSession { token, session })
    }
}
