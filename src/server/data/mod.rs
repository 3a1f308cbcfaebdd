//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. They report
//! absence with `Option` and leave the HTTP error contract to the service layer.

pub mod application;
