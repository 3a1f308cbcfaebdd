use axum::{extract::State, http::StatusCode, response::IntoResponse};
use jobtrack::{
    model::application::JobApplicationDto, server::controller::application::list_applications,
};

use super::*;

/// Expect 200 with an empty array when no job applications exist
#[tokio::test]
async fn returns_empty_array() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let result = list_applications(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<JobApplicationDto> = json_body(resp).await;
    assert!(body.is_empty());

    Ok(())
}

/// Expect 200 with every job application in insertion order
#[tokio::test]
async fn returns_every_application() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_applications(12).build().await?;

    let result = list_applications(State(test.to_app_state())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<JobApplicationDto> = json_body(resp).await;
    assert_eq!(body.len(), 12);
    assert_eq!(body[0].company, "Company 1");
    assert_eq!(body[11].company, "Company 12");

    Ok(())
}

/// Expect 500 when the store cannot be read
#[tokio::test]
async fn fails_with_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_applications(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
