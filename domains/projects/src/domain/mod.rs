//! Domain layer for the Projects domain

pub mod entities;
pub mod filter;
pub mod form;
pub mod gallery;
pub mod sample;
pub mod video;
