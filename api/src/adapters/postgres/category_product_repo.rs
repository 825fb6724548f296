//! PostgreSQL adapter for CategoryProductRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::domain::entities::{
    CategoryProduct, CategoryProductId, NewCategoryProduct, CATEGORY_SEARCH_LIMIT,
};
use crate::domain::ports::CategoryProductRepository;
use crate::entity::category_products;
use crate::error::DomainError;

/// PostgreSQL implementation of CategoryProductRepository
pub struct PostgresCategoryProductRepository {
    db: DatabaseConnection,
}

impl PostgresCategoryProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryProductRepository for PostgresCategoryProductRepository {
    async fn create(
        &self,
        categories: &[NewCategoryProduct],
    ) -> Result<Vec<CategoryProduct>, DomainError> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().fixed_offset();
        let ids: Vec<Uuid> = categories.iter().map(|_| Uuid::new_v4()).collect();
        let models: Vec<category_products::ActiveModel> = categories
            .iter()
            .zip(&ids)
            .map(|(c, id)| category_products::ActiveModel {
                id: Set(*id),
                label: Set(c.label.clone()),
                label_name: Set(c.label_name.clone()),
                created_at: Set(Some(now)),
            })
            .collect();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        category_products::Entity::insert_many(models)
            .exec(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let created = category_products::Entity::find()
            .filter(category_products::Column::Id.is_in(ids.clone()))
            .all(&txn)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        // Preserve the caller's order
        let mut created: Vec<CategoryProduct> = created.into_iter().map(|m| m.into()).collect();
        created.sort_by_key(|c| ids.iter().position(|id| *id == c.id.0));

        Ok(created)
    }

    async fn search_in_category(
        &self,
        search: &str,
    ) -> Result<Vec<CategoryProduct>, DomainError> {
        let results = category_products::Entity::find()
            .filter(category_products::Column::LabelName.like(contains_pattern(search)))
            .order_by_asc(category_products::Column::LabelName)
            .limit(CATEGORY_SEARCH_LIMIT as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

const LIKE_ESCAPE: char = '\\';

/// `%search%` with the LIKE wildcards in `search` matched literally
fn contains_pattern(search: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');

    LikeExpr::new(escaped).escape(LIKE_ESCAPE)
}

/// Convert SeaORM model to domain entity
impl From<category_products::Model> for CategoryProduct {
    fn from(model: category_products::Model) -> Self {
        CategoryProduct {
            id: CategoryProductId(model.id),
            label: model.label,
            label_name: model.label_name,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        }
    }
}
