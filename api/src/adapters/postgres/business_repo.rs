//! PostgreSQL adapter for BusinessRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::domain::entities::{Address, Business, BusinessId, Categories, NewBusiness, UserId};
use crate::domain::ports::BusinessRepository;
use crate::domain::tax_id::TaxIdKind;
use crate::entity::businesses;
use crate::error::DomainError;

/// PostgreSQL implementation of BusinessRepository
pub struct PostgresBusinessRepository {
    db: DatabaseConnection,
}

impl PostgresBusinessRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one_by(
        &self,
        column: businesses::Column,
        value: &str,
    ) -> Result<Option<Business>, DomainError> {
        let result = businesses::Entity::find()
            .filter(column.eq(value))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Business::try_from).transpose()
    }
}

#[async_trait]
impl BusinessRepository for PostgresBusinessRepository {
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError> {
        let result = businesses::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Business::try_from).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Business>, DomainError> {
        self.find_one_by(businesses::Column::Name, name).await
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> Result<Option<Business>, DomainError> {
        self.find_one_by(businesses::Column::TaxId, tax_id).await
    }

    async fn find_by_cell_phone(
        &self,
        cell_phone: &str,
    ) -> Result<Option<Business>, DomainError> {
        self.find_one_by(businesses::Column::CellPhone, cell_phone)
            .await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Business>, DomainError> {
        self.find_one_by(businesses::Column::Phone, phone).await
    }

    async fn create(&self, business: &NewBusiness) -> Result<Business, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();
        let categories = serde_json::to_value(business.categories.as_slice())
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let model = businesses::ActiveModel {
            id: Set(id),
            user_id: Set(business.user_id.0),
            name: Set(business.name.clone()),
            tax_id: Set(business.tax_id.clone()),
            tax_id_kind: Set(business.tax_id_kind.to_string()),
            categories: Set(categories),
            cell_phone: Set(business.cell_phone.clone()),
            phone: Set(business.phone.clone()),
            zip_code: Set(business.address.zip_code.clone()),
            street: Set(business.address.street.clone()),
            number: Set(business.address.number.clone()),
            complement: Set(business.address.complement.clone()),
            neighborhood: Set(business.address.neighborhood.clone()),
            city: Set(business.address.city.clone()),
            state: Set(business.address.state.clone()),
            avatar: Set(None),
            created_at: Set(Some(now)),
        };

        let result = model.insert(&self.db).await.map_err(map_write_err)?;

        Business::try_from(result)
    }

    async fn set_avatar(&self, id: &BusinessId, avatar: &str) -> Result<Business, DomainError> {
        let result = businesses::ActiveModel {
            id: Set(id.0),
            avatar: Set(Some(avatar.to_string())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::BusinessNotFound(*id),
            e => DomainError::Database(e.to_string()),
        })?;

        Business::try_from(result)
    }
}

/// Unique index violations mean another request won the read-then-write race
fn map_write_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
        _ => DomainError::Database(e.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<businesses::Model> for Business {
    type Error = DomainError;

    fn try_from(model: businesses::Model) -> Result<Self, Self::Error> {
        let labels: Vec<String> = serde_json::from_value(model.categories).map_err(|e| {
            DomainError::Internal(format!("Corrupt categories for {}: {}", model.id, e))
        })?;
        let categories = Categories::new(labels)?;
        let tax_id_kind: TaxIdKind = model.tax_id_kind.parse().map_err(DomainError::Internal)?;

        Ok(Business {
            id: BusinessId(model.id),
            user_id: UserId(model.user_id),
            name: model.name,
            tax_id: model.tax_id,
            tax_id_kind,
            categories,
            cell_phone: model.cell_phone,
            phone: model.phone,
            address: Address {
                zip_code: model.zip_code,
                street: model.street,
                number: model.number,
                complement: model.complement,
                neighborhood: model.neighborhood,
                city: model.city,
                state: model.state,
            },
            avatar: model.avatar,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
        })
    }
}
