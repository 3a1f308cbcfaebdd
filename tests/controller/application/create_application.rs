use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use jobtrack::{
    model::{
        api::ErrorDto,
        application::{JobApplicationDto, JobApplicationRequestDto},
    },
    server::controller::application::create_application,
};

use super::*;

/// Expect 201 with the stored record and an assigned ID
#[tokio::test]
async fn creates_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let result = create_application(State(test.to_app_state()), Ok(Json(acme_request()))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: JobApplicationDto = json_body(resp).await;
    assert!(body.id > 0);
    assert_eq!(body.company, "Acme");
    assert_eq!(body.applied.to_string(), "2024-01-01");

    Ok(())
}

/// Expect 400 naming the missing field
#[tokio::test]
async fn fails_for_missing_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;
    let request = JobApplicationRequestDto {
        deadline: None,
        ..acme_request()
    };

    let result = create_application(State(test.to_app_state()), Ok(Json(request))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.contains("deadline"));

    Ok(())
}

/// Expect 400 for an empty body
#[tokio::test]
async fn fails_for_empty_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let result = create_application(
        State(test.to_app_state()),
        Ok(Json(JobApplicationRequestDto::default())),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when the store rejects the insert
#[tokio::test]
async fn fails_with_bad_request_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = create_application(State(test.to_app_state()), Ok(Json(acme_request()))).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Error creating job application");

    Ok(())
}
