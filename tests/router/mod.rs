//! End-to-end tests driving the full API router.
//!
//! Requests go through routing, extraction and error rendering exactly as they would from
//! a browser, so these tests also cover path matching and text field coercion. Bodies the
//! JSON extractor rejects must still come back as a 400 with an `ErrorDto` body.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use jobtrack::{
    model::{
        api::ErrorDto,
        application::{
            DeletedApplicationDto, DeletedApplicationsDto, JobApplicationDto, APPLICATIONS_PATH,
        },
    },
    server::router::routes,
};
use jobtrack_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::json_body;

fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state())
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn raw_request(
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect a job application to be created, edited, listed and deleted through the API
#[tokio::test]
async fn application_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            APPLICATIONS_PATH,
            json!({
                "company": "Acme",
                "url": "http://a",
                "website": "http://a.com",
                "status": "applied",
                "applied": "2024-01-01",
                "deadline": "2024-02-01"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: JobApplicationDto = json_body(resp).await;

    let resp = app(&test)
        .oneshot(json_request(
            Method::PUT,
            &format!("{}/{}", APPLICATIONS_PATH, created.id),
            json!({ "status": "assignment" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: JobApplicationDto = json_body(resp).await;
    assert_eq!(updated.status, "assignment");
    assert_eq!(updated.company, "Acme");

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, APPLICATIONS_PATH))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Vec<JobApplicationDto> = json_body(resp).await;
    assert_eq!(listed, vec![updated.clone()]);

    let resp = app(&test)
        .oneshot(empty_request(
            Method::DELETE,
            &format!("{}/{}", APPLICATIONS_PATH, created.id),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let deleted: DeletedApplicationDto = json_body(resp).await;
    assert_eq!(deleted.deleted_record, updated);

    let resp = app(&test)
        .oneshot(empty_request(Method::DELETE, APPLICATIONS_PATH))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the delete response to use camelCase keys on the wire
#[tokio::test]
async fn delete_response_uses_camel_case() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_table().build().await?;
    let application = test.application().insert_mock_application("Acme").await?;

    let resp = app(&test)
        .oneshot(empty_request(
            Method::DELETE,
            &format!("{}/{}", APPLICATIONS_PATH, application.id),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert_eq!(body["deletedRecord"]["company"], "Acme");
    assert_eq!(body["deletedRecord"]["applied"], "2024-01-01");

    Ok(())
}

/// Expect bulk deletion to report how many records were removed
#[tokio::test]
async fn delete_all_reports_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_mock_applications(4).build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::DELETE, APPLICATIONS_PATH))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: DeletedApplicationsDto = json_body(resp).await;
    assert_eq!(body.deleted_count, 4);

    Ok(())
}

/// Expect 400 for a malformed ID in the path
#[tokio::test]
async fn malformed_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(
            Method::GET,
            &format!("{}/abc", APPLICATIONS_PATH),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the OpenAPI document to list the job application paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let resp = app(&test)
        .oneshot(empty_request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = json_body(resp).await;
    assert!(body["paths"]["/api/applications"].is_object());
    assert!(body["paths"]["/api/applications/{id}"].is_object());

    Ok(())
}

/// Expect numeric text fields to be stored as strings
#[tokio::test]
async fn create_coerces_numeric_company() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            APPLICATIONS_PATH,
            json!({
                "company": 123,
                "url": "http://a",
                "website": "http://a.com",
                "status": "applied",
                "applied": "2024-01-01",
                "deadline": "2024-02-01"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: JobApplicationDto = json_body(resp).await;
    assert_eq!(created.company, "123");

    Ok(())
}

/// Expect 400 with an error body for a body that is not valid JSON
#[tokio::test]
async fn create_rejects_unparseable_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let resp = app(&test)
        .oneshot(raw_request(
            Method::POST,
            APPLICATIONS_PATH,
            Some("application/json"),
            "{not json",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.starts_with("Invalid request body"));

    Ok(())
}

/// Expect 400 with an error body for a text field holding an object
#[tokio::test]
async fn create_rejects_wrongly_typed_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let resp = app(&test)
        .oneshot(json_request(
            Method::POST,
            APPLICATIONS_PATH,
            json!({ "company": { "name": "Acme" } }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.starts_with("Invalid request body"));

    Ok(())
}

/// Expect 400 with an error body when the JSON content type is missing
#[tokio::test]
async fn create_rejects_missing_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_application_table().build().await?;

    let resp = app(&test)
        .oneshot(raw_request(
            Method::POST,
            APPLICATIONS_PATH,
            None,
            r#"{"company":"Acme"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.starts_with("Invalid request body"));

    Ok(())
}

/// Expect 400 with an error body for an update whose body is not valid JSON
#[tokio::test]
async fn update_rejects_unparseable_body() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_application_table().build().await?;
    let application = test.application().insert_mock_application("Acme").await?;

    let resp = app(&test)
        .oneshot(raw_request(
            Method::PUT,
            &format!("{}/{}", APPLICATIONS_PATH, application.id),
            Some("application/json"),
            "[1, 2",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = json_body(resp).await;
    assert!(body.error.starts_with("Invalid request body"));

    Ok(())
}
