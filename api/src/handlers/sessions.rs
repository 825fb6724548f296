//! Session handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::app::StartedSession;
use crate::error::AppError;
use crate::AppState;

/// POST /sessions
///
/// Start a session for a new owner. Public; the returned token is what
/// `POST /business` expects.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<StartedSession>), AppError> {
    let session = state.session_service.start().await?;
    Ok((StatusCode::CREATED, Json(session)))
}
