//! Authentication configuration

/// Credentials of the single admin account
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    /// `hex(salt):hex(sha256(password || salt))`
    pub password_hash: String,
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_secret: String,
    pub session_ttl_seconds: u64,
    pub issuer: Option<String>,
    /// Sign-in is disabled when no admin account is configured
    pub admin: Option<AdminCredentials>,
}

impl AuthConfig {
    pub fn from_config(config: &folio_common::Config) -> Self {
        let admin = match (&config.admin_email, &config.admin_password_hash) {
            (Some(email), Some(password_hash)) => Some(AdminCredentials {
                email: email.clone(),
                password_hash: password_hash.clone(),
            }),
            _ => None,
        };

        Self {
            session_secret: config.session_secret.clone(),
            session_ttl_seconds: config.session_ttl_seconds,
            issuer: Some("folio".to_string()),
            admin,
        }
    }
}
