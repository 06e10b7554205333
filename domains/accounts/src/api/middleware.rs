//! Accounts domain state and auth backend integration

use axum::extract::FromRef;
use folio_auth::AuthBackend;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub auth: AuthBackend,
    /// Mark issued session cookies `Secure`
    pub secure_cookies: bool,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
