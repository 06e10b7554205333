//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Seven days, matching the admin session lifetime of the site
const DEFAULT_SESSION_TTL_SECONDS: u64 = 60 * 60 * 24 * 7;

/// 5 MiB upload ceiling
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// PostgreSQL connection URL; the in-memory store is used when unset
    pub database_url: Option<String>,

    /// Session signing
    pub session_secret: String,
    pub session_ttl_seconds: u64,
    /// Mark the session cookie `Secure` (HTTPS deployments)
    pub secure_cookies: bool,

    /// Admin account (sign-in disabled when either is missing)
    pub admin_email: Option<String>,
    pub admin_password_hash: Option<String>,

    /// Seed the in-memory store with the sample gallery
    pub seed_sample_projects: bool,

    /// Uploaded media
    pub upload_dir: String,
    pub upload_public_prefix: String,
    pub max_upload_bytes: usize,

    /// Runtime configuration
    pub cors_allowed_origins: Option<String>,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: non_empty_var("DATABASE_URL"),

            session_secret: non_empty_var("SESSION_SECRET")
                .ok_or_else(|| anyhow::anyhow!("SESSION_SECRET is required"))?,
            session_ttl_seconds: parsed_var("SESSION_TTL_SECONDS", DEFAULT_SESSION_TTL_SECONDS),
            secure_cookies: parsed_var("SECURE_COOKIES", false),

            admin_email: non_empty_var("ADMIN_EMAIL"),
            admin_password_hash: non_empty_var("ADMIN_PASSWORD_HASH"),

            seed_sample_projects: parsed_var("SEED_SAMPLE_PROJECTS", true),

            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            upload_public_prefix: env::var("UPLOAD_PUBLIC_PREFIX")
                .unwrap_or_else(|_| "/uploads".to_string()),
            max_upload_bytes: parsed_var("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),

            cors_allowed_origins: non_empty_var("CORS_ALLOWED_ORIGINS"),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug".to_string()),
            port: parsed_var("PORT", 3000),
        };

        Ok(config)
    }

    /// Whether the admin account is configured
    pub fn admin_enabled(&self) -> bool {
        self.admin_email.is_some() && self.admin_password_hash.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable configuration value");
            default
        }),
        Err(_) => default,
    }
}
