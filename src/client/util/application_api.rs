//! HTTP calls to the job application API.
//!
//! Every function resolves to `Err` with a readable message unless the server answered
//! with the operation's success status, so callers can leave their state untouched on
//! any failure.

#[cfg(feature = "web")]
use reqwasm::http::{Request, Response};

#[cfg(feature = "web")]
use crate::model::{
    api::ErrorDto,
    application::{
        DeletedApplicationDto, DeletedApplicationsDto, JobApplicationDto,
        JobApplicationRequestDto, APPLICATIONS_PATH,
    },
};

/// Retrieve every job application from the API
#[cfg(feature = "web")]
pub async fn get_applications() -> Result<Vec<JobApplicationDto>, String> {
    let response = Request::get(APPLICATIONS_PATH)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<Vec<JobApplicationDto>>()
            .await
            .map_err(|e| format!("Failed to parse job application data: {}", e)),
        _ => Err(request_error(response).await),
    }
}

/// Create a job application
#[cfg(feature = "web")]
pub async fn create_application(
    request: &JobApplicationRequestDto,
) -> Result<JobApplicationDto, String> {
    let body = serde_json::to_string(request)
        .map_err(|e| format!("Failed to serialize job application: {}", e))?;

    let response = Request::post(APPLICATIONS_PATH)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        201 => response
            .json::<JobApplicationDto>()
            .await
            .map_err(|e| format!("Failed to parse job application data: {}", e)),
        _ => Err(request_error(response).await),
    }
}

/// Update the non-empty fields of a job application
#[cfg(feature = "web")]
pub async fn update_application(
    id: i32,
    request: &JobApplicationRequestDto,
) -> Result<JobApplicationDto, String> {
    let body = serde_json::to_string(request)
        .map_err(|e| format!("Failed to serialize job application: {}", e))?;

    let response = Request::put(&format!("{}/{}", APPLICATIONS_PATH, id))
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<JobApplicationDto>()
            .await
            .map_err(|e| format!("Failed to parse job application data: {}", e)),
        _ => Err(request_error(response).await),
    }
}

/// Delete a single job application
#[cfg(feature = "web")]
pub async fn delete_application(id: i32) -> Result<DeletedApplicationDto, String> {
    let response = Request::delete(&format!("{}/{}", APPLICATIONS_PATH, id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<DeletedApplicationDto>()
            .await
            .map_err(|e| format!("Failed to parse delete response: {}", e)),
        _ => Err(request_error(response).await),
    }
}

/// Delete every job application
#[cfg(feature = "web")]
pub async fn delete_all_applications() -> Result<DeletedApplicationsDto, String> {
    let response = Request::delete(APPLICATIONS_PATH)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<DeletedApplicationsDto>()
            .await
            .map_err(|e| format!("Failed to parse delete response: {}", e)),
        _ => Err(request_error(response).await),
    }
}

#[cfg(feature = "web")]
async fn request_error(response: Response) -> String {
    let status = response.status();

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!("Request failed with status {}: {}", status, error_dto.error)
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!("Request failed with status {}: {}", status, error_text)
    }
}
