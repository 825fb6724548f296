//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod auth;
pub mod repositories;
pub mod storage;

pub use auth::AuthTokenIssuer;
pub use repositories::{BusinessRepository, CategoryProductRepository, CommandRepository};
pub use storage::StorageProvider;
