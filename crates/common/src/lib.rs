//! Shared utilities, configuration, and error handling for Folio
//!
//! This crate provides common functionality used across the Folio services:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP representation
//! - Field-keyed validation errors
//! - Custom axum extractors and pagination
//! - Password hashing helpers for the admin account

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;
pub mod fields;

pub use config::Config;
pub use crypto::{hash_secret, verify_secret_hash};
pub use error::{Error, Result};
pub use extractors::{JsonBody, Pagination, ValidatedJson};
pub use fields::FieldErrors;
