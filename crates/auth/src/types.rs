//! Session identity types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Role carried by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthRole {
    Admin,
}

impl AuthRole {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(AuthRole::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthRole::Admin => "admin",
        }
    }
}

impl std::fmt::Display for AuthRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user a session belongs to
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    pub email: String,
    pub role: AuthRole,
}

/// Session metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
