//! API layer for the Uploads domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::UploadsState;
pub use routes::routes;
