//! Session token authentication middleware

use std::sync::Arc;

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::adapters::HmacTokenIssuer;
use crate::domain::entities::{BusinessId, UserId};
use crate::error::{AppError, DomainError};

/// Caller identity taken from a verified session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    /// Business the token was issued for, if any
    pub business_id: Option<BusinessId>,
}

impl AuthenticatedUser {
    /// Allow access only to the business the token was issued for.
    /// Any other business is reported as not found.
    pub fn authorize_business(&self, business_id: BusinessId) -> Result<BusinessId, AppError> {
        if self.business_id == Some(business_id) {
            Ok(business_id)
        } else {
            tracing::debug!(
                user_id = %self.user_id,
                business_id = %business_id,
                "Business outside session scope"
            );
            Err(DomainError::BusinessNotFound(business_id).into())
        }
    }
}

/// Extract the bearer token from the Authorization header
fn extract_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Authentication middleware
///
/// Verifies the session token and injects an `AuthenticatedUser` into
/// request extensions.
pub async fn auth_middleware(
    State(tokens): State<Arc<HmacTokenIssuer>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request).ok_or(AppError::Unauthorized)?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected session token");
        AppError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id(),
        business_id: claims.business_id(),
    });

    Ok(next.run(request).await)
}
