//! Accounts domain: admin sign-in, sign-out and session introspection

pub mod api;

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
