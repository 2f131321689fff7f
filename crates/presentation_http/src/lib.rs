//! Roast Central HTTP presentation layer
//!
//! This crate provides the HTTP API for Roast Central.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{REQUEST_ID_HEADER, RequestId, ValidatedJson, ValidationError};
pub use routes::create_router;
pub use state::AppState;
