use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::validation::ValidationError};

/// Failures of a job application operation.
#[derive(Error, Debug)]
pub enum ApplicationError {
    /// Request body failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Path segment is not a well-formed job application ID.
    #[error("Invalid job application ID format: {0:?}")]
    InvalidId(String),
    /// Well-formed ID with no matching record.
    #[error("Job application ID {0} not found")]
    NotFound(i32),
    /// Bulk delete requested while the collection was already empty.
    #[error("No job applications found to delete")]
    NoneToDelete,
    /// Database failure while mutating the collection.
    ///
    /// Mutations report store failures as 400 rather than 500; only listing
    /// treats them as internal errors.
    #[error("Error {action} job application: {source}")]
    Store {
        action: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl ApplicationError {
    fn response(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(ErrorDto {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::InvalidId(ref id) => {
                tracing::debug!(id = %id, "{}", self);

                Self::response(StatusCode::BAD_REQUEST, "Invalid ID format")
            }
            Self::NotFound(id) => {
                tracing::debug!(id = %id, "{}", self);

                Self::response(StatusCode::NOT_FOUND, "Job application not found")
            }
            Self::NoneToDelete => {
                tracing::debug!("{}", self);

                Self::response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::Store { action, ref source } => {
                tracing::error!(action = %action, "Database error: {}", source);

                Self::response(
                    StatusCode::BAD_REQUEST,
                    format!("Error {} job application", action),
                )
            }
        }
    }
}
