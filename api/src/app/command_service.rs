//! Command listing service
//!
//! Lists a business's order tickets, optionally filtered by closed state.

use std::sync::Arc;

use crate::domain::entities::{BusinessId, Command, CommandFilter};
use crate::domain::ports::{BusinessRepository, CommandRepository};
use crate::error::{AppError, DomainError};

#[derive(Debug, Clone, Copy)]
pub struct ListCommands {
    pub business_id: BusinessId,
    /// `None` lists open and closed commands
    pub closed: Option<bool>,
}

/// Service for reading commands
pub struct CommandListingService<BR, CR>
where
    BR: BusinessRepository,
    CR: CommandRepository,
{
    businesses: Arc<BR>,
    commands: Arc<CR>,
}

impl<BR, CR> CommandListingService<BR, CR>
where
    BR: BusinessRepository,
    CR: CommandRepository,
{
    pub fn new(businesses: Arc<BR>, commands: Arc<CR>) -> Self {
        Self {
            businesses,
            commands,
        }
    }

    /// List commands of an existing business
    pub async fn execute(&self, request: ListCommands) -> Result<Vec<Command>, AppError> {
        if self
            .businesses
            .find_by_id(&request.business_id)
            .await?
            .is_none()
        {
            return Err(DomainError::BusinessNotFound(request.business_id).into());
        }

        let filter = CommandFilter {
            business_id: request.business_id,
            closed: request.closed,
        };

        Ok(self.commands.get_all(&filter).await?)
    }
}
