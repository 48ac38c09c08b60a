//! Unified error types for the PetClinic API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Repository and business rule errors
//! - `ParseError`: Malformed values in request bodies
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::EntityKind;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{kind} not found with id: {id}")]
    NotFound { kind: EntityKind, id: i32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn not_found(kind: EntityKind, id: impl Into<i32>) -> Self {
        DomainError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
impl AppError {
    /// True when the error is a missing record of the given kind
    pub fn is_not_found(&self, kind: EntityKind) -> bool {
        matches!(self, AppError::Domain(DomainError::NotFound { kind: k, .. }) if *k == kind)
    }
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
            AppError::Domain(e @ DomainError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Not found", Some(e.to_string()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Parse(msg) => (StatusCode::BAD_REQUEST, "Parse error", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

/// Parse errors for values carried as text on the wire
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid visit date '{value}': {source}")]
    VisitDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid visit date '{0}': expected YYYY-MM-DD")]
    VisitDateFormat(String),
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = DomainError::not_found(EntityKind::PetType, 42);
        assert_eq!(err.to_string(), "PetType not found with id: 42");
    }

    #[test]
    fn not_found_maps_to_404() {
        let response =
            AppError::from(DomainError::not_found(EntityKind::Owner, 999)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response =
            AppError::from(DomainError::Validation("petId is required".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_maps_to_500() {
        let response =
            AppError::from(DomainError::Database("connection reset".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_error_maps_to_400() {
        let source = chrono::NaiveDate::parse_from_str("15/01/2024", "%Y-%m-%d").unwrap_err();
        let err = ParseError::VisitDate {
            value: "15/01/2024".to_string(),
            source,
        };
        assert!(err.to_string().contains("15/01/2024"));

        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn is_not_found_checks_kind() {
        let err = AppError::from(DomainError::not_found(EntityKind::Pet, 7));
        assert!(err.is_not_found(EntityKind::Pet));
        assert!(!err.is_not_found(EntityKind::Visit));
    }
}
