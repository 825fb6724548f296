//! Authentication
//!
//! Bearer-token middleware for the protected routes.

pub mod token;

pub use token::{auth_middleware, AuthenticatedUser};
