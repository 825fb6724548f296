//! Session service
//!
//! Starts a session for a new owner account. The token it returns is not
//! bound to a business yet; onboarding issues the business-scoped one.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::UserId;
use crate::domain::ports::AuthTokenIssuer;
use crate::error::AppError;

/// A freshly started owner session
#[derive(Debug, Clone, Serialize)]
pub struct StartedSession {
    pub user_id: UserId,
    pub token: String,
}

pub struct SessionService<TI>
where
    TI: AuthTokenIssuer,
{
    tokens: Arc<TI>,
}

impl<TI> SessionService<TI>
where
    TI: AuthTokenIssuer,
{
    pub fn new(tokens: Arc<TI>) -> Self {
        Self { tokens }
    }

    /// Mint a new owner identity and a user-scoped token for it
    pub async fn start(&self) -> Result<StartedSession, AppError> {
        let user_id = UserId(Uuid::new_v4());
        let token = self.tokens.issue_for_user(&user_id).await?;

        tracing::info!(user_id = %user_id, "Session started");

        Ok(StartedSession { user_id, token })
    }
}
