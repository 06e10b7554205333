//! Session token issuing, validation and extraction helpers

use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::SessionClaims;
use crate::config::AuthConfig;
use crate::cookie::SESSION_COOKIE;
use crate::error::AuthError;
use crate::types::AuthRole;

/// Mint a signed admin session token for `email`
pub fn issue_session_token(
    config: &AuthConfig,
    email: &str,
    now: DateTime<Utc>,
) -> Result<(String, SessionClaims), AuthError> {
    let iat = now.timestamp().max(0) as u64;
    let claims = SessionClaims {
        sub: email.to_string(),
        sid: Uuid::new_v4().to_string(),
        iat,
        exp: iat + config.session_ttl_seconds,
        iss: config.issuer.clone(),
        role: AuthRole::Admin.as_str().to_string(),
    };

    let key = EncodingKey::from_secret(config.session_secret.as_ref());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AuthError::TokenIssueFailed
    })?;

    Ok((token, claims))
}

/// Validate a session token signed with the configured secret
pub(crate) fn validate_session_token(
    token: &str,
    config: &AuthConfig,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.session_secret.as_ref());

    let token_data = decode::<SessionClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(AuthError::InvalidAuthorizationFormat),
    }
}

/// Extract the session token from the `Cookie` header(s), if present
pub(crate) fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
