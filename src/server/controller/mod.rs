//! HTTP controller endpoints for the job application API.
//!
//! Axum handlers extract path and body parameters, delegate to the services, and return
//! JSON responses. Failures are returned as [`crate::server::error::Error`], which maps
//! itself to a status code and an `ErrorDto` body. Every handler carries a utoipa
//! annotation for the OpenAPI document.

pub mod application;
