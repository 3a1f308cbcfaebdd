use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        application::{
            DeletedApplicationDto, DeletedApplicationsDto, JobApplicationDto,
            JobApplicationRequestDto,
        },
    },
    server::{
        error::{validation::ValidationError, Error},
        model::app::AppState,
        service::application::JobApplicationService,
    },
};

pub static APPLICATION_TAG: &str = "application";

/// List every job application
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "Success when retrieving job applications", body = Vec<JobApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_applications(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let service = JobApplicationService::new(&state.db);

    let applications = service.list().await?;

    Ok((StatusCode::OK, Json(applications)))
}

/// Create a job application, every field is required
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = JobApplicationRequestDto,
    responses(
        (status = 201, description = "Job application created", body = JobApplicationDto),
        (status = 400, description = "Malformed body, missing field, invalid date, or store failure", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    payload: Result<Json<JobApplicationRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let service = JobApplicationService::new(&state.db);

    let Json(request) = payload.map_err(ValidationError::from)?;

    let application = service.create(request).await?;

    Ok((StatusCode::CREATED, Json(application)))
}

/// Get a single job application
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = String, Path, description = "Job application ID")),
    responses(
        (status = 200, description = "Success when retrieving the job application", body = JobApplicationDto),
        (status = 400, description = "Invalid ID format", body = ErrorDto),
        (status = 404, description = "Job application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = JobApplicationService::new(&state.db);

    let application = service.get(&id).await?;

    Ok((StatusCode::OK, Json(application)))
}

/// Update the supplied fields of a job application
///
/// Fields that are absent or empty keep their stored value.
#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = String, Path, description = "Job application ID")),
    request_body = JobApplicationRequestDto,
    responses(
        (status = 200, description = "Job application updated", body = JobApplicationDto),
        (status = 400, description = "Malformed body, invalid ID format, invalid date, or store failure", body = ErrorDto),
        (status = 404, description = "Job application not found", body = ErrorDto)
    ),
)]
pub async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<JobApplicationRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let service = JobApplicationService::new(&state.db);

    let Json(request) = payload.map_err(ValidationError::from)?;

    let application = service.update(&id, request).await?;

    Ok((StatusCode::OK, Json(application)))
}

/// Delete a single job application
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = String, Path, description = "Job application ID")),
    responses(
        (status = 200, description = "Job application deleted", body = DeletedApplicationDto),
        (status = 400, description = "Invalid ID format or store failure", body = ErrorDto),
        (status = 404, description = "Job application not found", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let service = JobApplicationService::new(&state.db);

    let deleted = service.delete(&id).await?;

    Ok((StatusCode::OK, Json(deleted)))
}

/// Delete every job application
#[utoipa::path(
    delete,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    responses(
        (status = 200, description = "All job applications deleted", body = DeletedApplicationsDto),
        (status = 400, description = "Store failure", body = ErrorDto),
        (status = 404, description = "No job applications found to delete", body = ErrorDto)
    ),
)]
pub async fn delete_all_applications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let service = JobApplicationService::new(&state.db);

    let deleted = service.delete_all().await?;

    Ok((StatusCode::OK, Json(deleted)))
}
