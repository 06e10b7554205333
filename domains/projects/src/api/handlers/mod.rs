//! HTTP handlers for the Projects domain

pub mod gallery;
pub mod projects;
