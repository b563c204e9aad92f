//! In-repo test doubles
//!
//! An axum mock of the placeholder API and an in-memory scripted
//! browser for the demo web application. Integration tests run against
//! these instead of the live services.

pub mod api;
pub mod browser;
mod data;

pub use api::{app, serve};
pub use browser::{DemoBrowser, VALID_PASSWORD, VALID_USERNAME};
