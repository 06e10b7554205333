//! Authentication for the Folio admin API
//!
//! Provides session validation, admin sign-in, and axum extractors
//! that work with any domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod cookie;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::{AuthBackend, IssuedSession};
pub use claims::SessionClaims;
pub use config::{AdminCredentials, AuthConfig};
pub use context::AuthSession;
pub use cookie::{clear_session_cookie, session_cookie, SESSION_COOKIE};
pub use error::{AuthError, LOGIN_PATH};
pub use extractors::{AdminUser, OptionalSession};
pub use jwt::issue_session_token;
pub use types::{AuthRole, SessionInfo, SessionUser};
