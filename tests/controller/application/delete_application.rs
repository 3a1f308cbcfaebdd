use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use jobtrack::{
    model::application::{DeletedApplicationDto, JobApplicationDto},
    server::controller::application::{delete_application, list_applications},
};

use super::*;

/// Expect 200 with a confirmation message and the deleted record
#[tokio::test]
async fn deletes_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_table().build().await?;
    let application = test.application().insert_mock_application("Acme").await?;

    let result = delete_application(
        State(test.to_app_state()),
        Path(application.id.to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: DeletedApplicationDto = json_body(resp).await;
    assert_eq!(body.message, "Job application deleted successfully");
    assert_eq!(body.deleted_record, JobApplicationDto::from(application));

    let remaining = list_applications(State(test.to_app_state()))
        .await
        .unwrap()
        .into_response();
    let remaining: Vec<JobApplicationDto> = json_body(remaining).await;
    assert!(remaining.is_empty());

    Ok(())
}

/// Expect 404 when deleting the same job application twice
#[tokio::test]
async fn fails_for_already_deleted_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_table().build().await?;
    let application = test.application().insert_mock_application("Acme").await?;

    let first = delete_application(
        State(test.to_app_state()),
        Path(application.id.to_string()),
    )
    .await;
    assert!(first.is_ok());

    let second = delete_application(
        State(test.to_app_state()),
        Path(application.id.to_string()),
    )
    .await;

    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 400 for a malformed ID
#[tokio::test]
async fn fails_for_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let result = delete_application(State(test.to_app_state()), Path("-5".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
