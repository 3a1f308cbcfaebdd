use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request body rejected before it reaches the store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or empty on creation
    #[error("All fields are required, missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// A date field could not be read as a calendar date
    #[error("Invalid date for field {field}: {value:?}, expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    /// The body was not a JSON object of the expected shape, or not sent as JSON
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation error: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
