//! Product category handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::CategoryProduct;
use crate::error::AppError;
use crate::AppState;

/// Request to create product categories in bulk
#[derive(Debug, Deserialize)]
pub struct CreateCategoriesRequest {
    pub labels: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchCategoriesQuery {
    #[serde(default)]
    pub search: String,
}

/// POST /categories
pub async fn create_categories(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoriesRequest>,
) -> Result<(StatusCode, Json<Vec<CategoryProduct>>), AppError> {
    let created = state.category_service.create(request.labels).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /categories?search=
///
/// Search categories by label, ignoring case and accents.
pub async fn search_categories(
    State(state): State<AppState>,
    Query(query): Query<SearchCategoriesQuery>,
) -> Result<Json<Vec<CategoryProduct>>, AppError> {
    let found = state.category_service.search(&query.search).await?;
    Ok(Json(found))
}
