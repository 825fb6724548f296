//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    Business, BusinessId, CategoryProduct, Command, CommandFilter, NewBusiness,
    NewCategoryProduct,
};
use crate::error::DomainError;

/// Repository for Business entities
///
/// The `find_by_*` lookups back the onboarding uniqueness probes and take
/// already normalized values.
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find a business by ID
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError>;

    /// Find a business by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Business>, DomainError>;

    /// Find a business by normalized tax id
    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Business>, DomainError>;

    /// Find a business by normalized cell phone
    async fn find_by_cell_phone(&self, cell_phone: &str)
        -> Result<Option<Business>, DomainError>;

    /// Find a business by normalized phone
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Business>, DomainError>;

    /// Create a new business
    async fn create(&self, business: &NewBusiness) -> Result<Business, DomainError>;

    /// Attach a stored avatar reference
    async fn set_avatar(&self, id: &BusinessId, avatar: &str) -> Result<Business, DomainError>;
}

/// Repository for Command entities (order tickets)
#[async_trait]
pub trait CommandRepository: Send + Sync {
    /// List commands of a business, optionally filtered by closed state
    async fn get_all(&self, filter: &CommandFilter) -> Result<Vec<Command>, DomainError>;
}

/// Repository for product categories
#[async_trait]
pub trait CategoryProductRepository: Send + Sync {
    /// Bulk-create categories
    async fn create(
        &self,
        categories: &[NewCategoryProduct],
    ) -> Result<Vec<CategoryProduct>, DomainError>;

    /// Substring search on the folded label, bounded to `CATEGORY_SEARCH_LIMIT`.
    /// `search` must already be normalized.
    async fn search_in_category(&self, search: &str)
        -> Result<Vec<CategoryProduct>, DomainError>;
}
