//! Business domain entity
//!
//! Represents a venue onboarded into the directory and owned by a user account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::categories::Categories;
use crate::domain::tax_id::TaxIdKind;

/// Unique identifier for a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessId(pub Uuid);

impl BusinessId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BusinessId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BusinessId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the owning user account (managed outside this service)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Postal address of a business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Digits only
    pub zip_code: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// An onboarded business
#[derive(Debug, Clone, Serialize)]
pub struct Business {
    pub id: BusinessId,
    pub user_id: UserId,
    pub name: String,
    /// Normalized (digits only)
    pub tax_id: String,
    pub tax_id_kind: TaxIdKind,
    pub categories: Categories,
    pub cell_phone: Option<String>,
    pub phone: Option<String>,
    pub address: Address,
    /// Stored avatar reference
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new business.
///
/// All values are already validated and normalized by the onboarding service.
#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub user_id: UserId,
    pub name: String,
    pub tax_id: String,
    pub tax_id_kind: TaxIdKind,
    pub categories: Categories,
    pub cell_phone: Option<String>,
    pub phone: Option<String>,
    pub address: Address,
}
