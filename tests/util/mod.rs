//! Shared helpers for the integration tests.

use axum::{body::Body, http::Response};
use jobtrack::model::application::JobApplicationRequestDto;
use serde::de::DeserializeOwned;

/// Complete request body for a job application at Acme
pub fn acme_request() -> JobApplicationRequestDto {
    JobApplicationRequestDto {
        company: Some("Acme".to_string()),
        url: Some("http://a".to_string()),
        website: Some("http://a.com".to_string()),
        status: Some("applied".to_string()),
        applied: Some("2024-01-01".to_string()),
        deadline: Some("2024-02-01".to_string()),
    }
}

/// Read a response body as JSON
pub async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
