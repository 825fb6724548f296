//! Category service
//!
//! Bulk-creates product categories and searches them by folded label.

use std::sync::Arc;

use crate::domain::entities::{CategoryProduct, NewCategoryProduct};
use crate::domain::normalize::normalize_label;
use crate::domain::ports::CategoryProductRepository;
use crate::error::{AppError, DomainError};

pub struct CategoryService<CR>
where
    CR: CategoryProductRepository,
{
    categories: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryProductRepository,
{
    pub fn new(categories: Arc<CR>) -> Self {
        Self { categories }
    }

    /// Create one category per label
    pub async fn create(&self, labels: Vec<String>) -> Result<Vec<CategoryProduct>, AppError> {
        if labels.is_empty() {
            return Err(DomainError::InvalidInput("At least one label is required".to_string()).into());
        }

        let mut new_categories = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.trim();
            if label.is_empty() {
                return Err(DomainError::InvalidInput("Labels cannot be blank".to_string()).into());
            }
            new_categories.push(NewCategoryProduct {
                label: label.to_string(),
                label_name: normalize_label(label),
            });
        }

        let created = self.categories.create(&new_categories).await?;
        tracing::debug!(count = created.len(), "Created product categories");

        Ok(created)
    }

    /// Case and diacritic insensitive substring search
    pub async fn search(&self, text: &str) -> Result<Vec<CategoryProduct>, AppError> {
        let search = normalize_label(text);
        if search.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.categories.search_in_category(&search).await?)
    }
}
