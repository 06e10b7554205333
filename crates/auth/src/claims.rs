//! JWT claims types

use serde::{Deserialize, Serialize};

/// Claims carried by an admin session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (admin email)
    pub sub: String,
    /// Session ID
    pub sid: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    /// Role of the session holder
    pub role: String,
}
