//! HTTP handlers for the Uploads domain

pub mod uploads;
