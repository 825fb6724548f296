//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod business;
pub mod categories;
pub mod commands;
pub mod sessions;

pub use business::create_business;
pub use categories::{create_categories, search_categories};
pub use commands::list_commands;
pub use sessions::create_session;
