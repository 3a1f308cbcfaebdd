//! Client-side state and the requests that update it.

#[cfg(feature = "web")]
pub mod actions;
pub mod application;
