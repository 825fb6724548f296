//! Session token port

use async_trait::async_trait;

use crate::domain::entities::{BusinessId, UserId};
use crate::error::TokenError;

/// Mints session tokens for a user acting on behalf of a business.
/// The token format is opaque to callers.
#[async_trait]
pub trait AuthTokenIssuer: Send + Sync {
    async fn issue(&self, user_id: &UserId, business_id: &BusinessId)
        -> Result<String, TokenError>;

    /// Token for a user that has not onboarded a business yet
    async fn issue_for_user(&self, user_id: &UserId) -> Result<String, TokenError>;
}
