//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod business;
pub mod categories;
pub mod category_product;
pub mod command;

pub use business::{Address, Business, BusinessId, NewBusiness, UserId};
pub use categories::Categories;
pub use category_product::{
    CategoryProduct, CategoryProductId, NewCategoryProduct, CATEGORY_SEARCH_LIMIT,
};
pub use command::{Command, CommandFilter, CommandId};
