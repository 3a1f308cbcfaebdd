pub mod application_api;
