//! Error types for the job application server.
//!
//! Each domain has its own `thiserror` enum (configuration, request validation, job
//! application operations) aggregated into [`Error`]. All of them implement `IntoResponse`
//! so handlers can return them directly with `?`.

pub mod application;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        application::ApplicationError, config::ConfigError, validation::ValidationError,
    },
};

/// Main error type for the server application.
///
/// Uses `thiserror`'s `#[from]` attribute to enable automatic conversion from the
/// underlying error types via the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Job application operation error (validation, malformed ID, not found, store failure).
    #[error(transparent)]
    ApplicationError(#[from] ApplicationError),
    /// Database error (query failures, connection issues).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::ApplicationError(err.into())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures, malformed IDs, and store failures during mutations
/// - 404 Not Found - Missing job applications
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ApplicationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
