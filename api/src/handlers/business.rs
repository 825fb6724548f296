//! Business handlers
//!
//! Onboarding endpoint.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::app::{OnboardBusiness, OnboardedBusiness};
use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::AppState;

/// Request to onboard a business; the owner comes from the session token
#[derive(Debug, Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    /// Comma-separated category labels, e.g. "bares, restaurantes"
    pub categories: String,
    pub tax_id: String,
    pub cell_phone: Option<String>,
    pub phone: Option<String>,
    pub zip_code: String,
    pub number: String,
    pub complement: Option<String>,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    /// Name of a file previously uploaded to the temporary directory
    pub avatar: Option<String>,
}

/// POST /business
///
/// Onboard a new business owned by the caller.
pub async fn create_business(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateBusinessRequest>,
) -> Result<(StatusCode, Json<OnboardedBusiness>), AppError> {
    let onboarded = state
        .onboarding_service
        .execute(OnboardBusiness {
            user_id: user.user_id,
            name: request.name,
            categories: request.categories,
            tax_id: request.tax_id,
            cell_phone: request.cell_phone,
            phone: request.phone,
            zip_code: request.zip_code,
            number: request.number,
            complement: request.complement,
            street: request.street,
            neighborhood: request.neighborhood,
            city: request.city,
            state: request.state,
            avatar: request.avatar,
        })
        .await
        .map_err(|e| {
            if let AppError::Domain(ref rule) = e {
                if rule.is_business_rule() {
                    tracing::info!(user_id = %user.user_id, reason = %rule, "Onboarding rejected");
                }
            }
            e
        })?;

    Ok((StatusCode::CREATED, Json(onboarded)))
}
