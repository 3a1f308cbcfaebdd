use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use jobtrack::{
    model::{api::ErrorDto, application::JobApplicationDto},
    server::controller::application::get_application,
};

use super::*;

/// Expect 200 with the requested job application
#[tokio::test]
async fn returns_application() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_table().build().await?;
    let application = test.application().insert_mock_application("Acme").await?;

    let result = get_application(
        State(test.to_app_state()),
        Path(application.id.to_string()),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: JobApplicationDto = json_body(resp).await;
    assert_eq!(body.id, application.id);
    assert_eq!(body.company, "Acme");

    Ok(())
}

/// Expect 404 for a well-formed ID that matches nothing
#[tokio::test]
async fn fails_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let result = get_application(State(test.to_app_state()), Path("1".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Job application not found");

    Ok(())
}

/// Expect 400 for a malformed ID
#[tokio::test]
async fn fails_for_malformed_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let result = get_application(State(test.to_app_state()), Path("abc".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert_eq!(body.error, "Invalid ID format");

    Ok(())
}
