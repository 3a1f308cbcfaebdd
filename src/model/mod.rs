//! Data transfer types shared between the server API and the browser client.

pub mod api;
pub mod application;
