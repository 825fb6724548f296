//! SeaORM entities
//!
//! Table models mapped by the PostgreSQL adapters. Schema lives in
//! `migrations/001_initial.sql`.

pub mod businesses;
pub mod category_products;
pub mod commands;
