//! Business category list
//!
//! A business is tagged with between one and four category labels. The wire
//! format is a comma-separated string; the domain holds the ordered list.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum number of categories a business may carry
pub const MAX_CATEGORIES: usize = 4;

/// Ordered, non-empty list of at most [`MAX_CATEGORIES`] labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Categories(Vec<String>);

impl Categories {
    /// Build from already split labels. Labels are trimmed and blanks dropped.
    pub fn new(labels: Vec<String>) -> Result<Self, DomainError> {
        let labels: Vec<String> = labels
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();

        if labels.is_empty() {
            return Err(DomainError::InvalidInput(
                "At least one category is required".to_string(),
            ));
        }
        if labels.len() > MAX_CATEGORIES {
            return Err(DomainError::InvalidInput(format!(
                "A business can have at most {} categories, got {}",
                MAX_CATEGORIES,
                labels.len()
            )));
        }

        Ok(Self(labels))
    }

    /// Parse a comma-separated category string (`"bares, restaurantes"`)
    pub fn parse(csv: &str) -> Result<Self, DomainError> {
        Self::new(csv.split(',').map(str::to_string).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for Categories {
    type Error = DomainError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<Categories> for Vec<String> {
    fn from(categories: Categories) -> Self {
        categories.0
    }
}
