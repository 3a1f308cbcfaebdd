//! Server application models and type definitions.
//!
//! Application state shared by the HTTP handlers, database model type aliases, and the
//! validated input types passed from the service layer to the repositories.

pub mod app;
pub mod application;
pub mod db;
