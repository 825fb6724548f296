//! Command handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::app::ListCommands;
use crate::auth::AuthenticatedUser;
use crate::domain::entities::{BusinessId, Command};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing commands
#[derive(Debug, Default, Deserialize)]
pub struct ListCommandsQuery {
    /// Omit to list both open and closed commands
    pub closed: Option<bool>,
}

/// GET /business/:id/commands
///
/// List the commands of a business. Only the business the session token
/// was issued for is visible.
pub async fn list_commands(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Query(query): Query<ListCommandsQuery>,
) -> Result<Json<Vec<Command>>, AppError> {
    let business_id = user.authorize_business(BusinessId(id))?;

    let commands = state
        .command_service
        .execute(ListCommands {
            business_id,
            closed: query.closed,
        })
        .await?;

    Ok(Json(commands))
}
