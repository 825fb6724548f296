//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod business_repo;
pub mod category_product_repo;
pub mod command_repo;


pub use business_repo::PostgresBusinessRepository;
pub use category_product_repo::PostgresCategoryProductRepository;
pub use command_repo::PostgresCommandRepository;
