//! Placebo API test client
//!
//! HTTP transport, resource clients, data factories, and response
//! validators for a JSON placeholder-style REST API.

pub mod config;
pub mod error;
pub mod factory;
pub mod http;
pub mod model;
pub mod posts;
pub mod users;
pub mod validate;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ApiResult, Error};
pub use http::{ApiResponse, HttpClient};
pub use model::{Address, Comment, Company, Geo, Post, PostPatch, User, UserPatch};
pub use posts::PostsClient;
pub use users::UsersClient;
pub use validate::{JsonKind, ValidationError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
