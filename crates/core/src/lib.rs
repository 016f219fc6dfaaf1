//! Domain logic for the mix archive listing page.
//!
//! This crate has no async or database dependencies so the parameter
//! validation, URL building, and search/escaping helpers can be unit
//! tested headlessly and reused by any future CLI tooling.

pub mod escape;
pub mod params;
pub mod search;
pub mod types;
pub mod urls;
