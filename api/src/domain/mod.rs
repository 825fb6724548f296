//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `tax_id`: Tax identifier validation
//! - `normalize`: Phone/label normalization

pub mod entities;
pub mod normalize;
pub mod ports;
pub mod tax_id;
