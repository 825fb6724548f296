//! PostgreSQL adapter for CommandRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{BusinessId, Command, CommandFilter, CommandId};
use crate::domain::ports::CommandRepository;
use crate::entity::commands;
use crate::error::DomainError;

/// PostgreSQL implementation of CommandRepository
pub struct PostgresCommandRepository {
    db: DatabaseConnection,
}

impl PostgresCommandRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommandRepository for PostgresCommandRepository {
    async fn get_all(&self, filter: &CommandFilter) -> Result<Vec<Command>, DomainError> {
        let mut query =
            commands::Entity::find().filter(commands::Column::BusinessId.eq(filter.business_id.0));

        if let Some(closed) = filter.closed {
            query = query.filter(commands::Column::Closed.eq(closed));
        }

        let results = query
            .order_by_desc(commands::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<commands::Model> for Command {
    fn from(model: commands::Model) -> Self {
        Command {
            id: CommandId(model.id),
            business_id: BusinessId(model.business_id),
            table: model.table_label,
            closed: model.closed,
            created_at: model
                .created_at
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(Utc::now),
            closed_at: model.closed_at.map(|dt| dt.with_timezone(&Utc)),
        }
    }
}
