//! Server application core modules.
//!
//! This module contains all server-side functionality for the job application tracker:
//! HTTP routing, request validation, database operations and startup wiring. Requests flow
//! from the controllers through the services, which validate input and apply the record
//! lifecycle rules, down to the repositories that talk to the database.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
