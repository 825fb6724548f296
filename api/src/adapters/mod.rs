//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod storage;
pub mod token;

pub use postgres::{
    PostgresBusinessRepository, PostgresCategoryProductRepository, PostgresCommandRepository,
};
pub use storage::DiskStorageProvider;
pub use token::HmacTokenIssuer;
