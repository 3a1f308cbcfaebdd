//! Business logic services.
//!
//! Services sit between the HTTP controllers and the repositories, validating requests and
//! translating repository outcomes into the API's error contract.

pub mod application;
