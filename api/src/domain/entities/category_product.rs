//! Product category entity
//!
//! Labels used to tag products. `label_name` holds the folded form used by search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of results returned by a category search
pub const CATEGORY_SEARCH_LIMIT: usize = 15;

/// Unique identifier for a product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryProductId(pub Uuid);

impl From<Uuid> for CategoryProductId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CategoryProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryProduct {
    pub id: CategoryProductId,
    pub label: String,
    pub label_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategoryProduct {
    pub label: String,
    pub label_name: String,
}
