//! Unified error types for the TabDesk API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business rule and persistence errors
//! - `StorageError`: Avatar storage errors
//! - `TokenError`: Session token minting/verification errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::BusinessId;

/// Domain layer errors - business rules and persistence
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid tax id: {0}")]
    InvalidTaxId(String),

    #[error("Business name already registered: {0}")]
    DuplicateName(String),

    #[error("Tax id already registered: {0}")]
    DuplicateTaxId(String),

    #[error("Cell phone already registered: {0}")]
    DuplicateCellPhone(String),

    #[error("Phone already registered: {0}")]
    DuplicatePhone(String),

    #[error("Business not found: {0}")]
    BusinessNotFound(BusinessId),

    /// Raised by the database when a unique index rejects a write
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Whether this error is a business-rule violation the caller can fix
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidInput(_)
                | DomainError::InvalidTaxId(_)
                | DomainError::DuplicateName(_)
                | DomainError::DuplicateTaxId(_)
                | DomainError::DuplicateCellPhone(_)
                | DomainError::DuplicatePhone(_)
                | DomainError::BusinessNotFound(_)
        )
    }
}

/// Avatar storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid file reference: {0}")]
    InvalidReference(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Session token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Application layer errors - used by services and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::InvalidInput(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::InvalidTaxId(msg)) => {
                (StatusCode::BAD_REQUEST, "Invalid tax id", Some(msg.clone()))
            }
            AppError::Domain(
                e @ (DomainError::DuplicateName(_)
                | DomainError::DuplicateTaxId(_)
                | DomainError::DuplicateCellPhone(_)
                | DomainError::DuplicatePhone(_)),
            ) => (StatusCode::CONFLICT, "Already exists", Some(e.to_string())),
            AppError::Domain(DomainError::Conflict(msg)) => {
                (StatusCode::CONFLICT, "Conflict", Some(msg.clone()))
            }
            AppError::Domain(DomainError::BusinessNotFound(id)) => (
                StatusCode::NOT_FOUND,
                "Not found",
                Some(format!("Business {} not found", id)),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Storage(e) => match e {
                StorageError::FileNotFound(_) | StorageError::InvalidReference(_) => {
                    tracing::debug!("Rejected avatar: {}", e);
                    (
                        StatusCode::BAD_REQUEST,
                        "Invalid avatar",
                        Some(e.to_string()),
                    )
                }
                StorageError::Io(_) => {
                    tracing::error!("Storage error: {}", e);
                    (StatusCode::INTERNAL_SERVER_ERROR, "Storage error", None)
                }
            },
            AppError::Token(TokenError::Signing(msg)) => {
                tracing::error!("Token signing error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Token(e) => (StatusCode::UNAUTHORIZED, "Unauthorized", Some(e.to_string())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
