//! Authenticated session context

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::error::AuthError;
use crate::types::{AuthRole, SessionInfo, SessionUser};

/// A validated session: who is signed in, and which session they hold
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: SessionUser,
    pub session: SessionInfo,
}

impl AuthSession {
    /// Build a session from already-verified token claims
    pub(crate) fn from_claims(claims: &SessionClaims) -> Result<Self, AuthError> {
        let role = AuthRole::parse(&claims.role).ok_or(AuthError::InvalidToken)?;
        let id = Uuid::parse_str(&claims.sid).map_err(|_| AuthError::InvalidToken)?;
        let issued_at = timestamp(claims.iat)?;
        let expires_at = timestamp(claims.exp)?;

        Ok(Self {
            user: SessionUser {
                email: claims.sub.clone(),
                role,
            },
            session: SessionInfo {
                id,
                issued_at,
                expires_at,
            },
        })
    }

    #[mutants::skip] // Admin is the only role, so every parsed session passes
    pub fn is_admin(&self) -> bool {
        self.user.role == AuthRole::Admin
    }
}

fn timestamp(secs: u64) -> Result<DateTime<Utc>, AuthError> {
    let secs = i64::try_from(secs).map_err(|_| AuthError::InvalidToken)?;
    DateTime::from_timestamp(secs, 0).ok_or(AuthError::InvalidToken)
}
