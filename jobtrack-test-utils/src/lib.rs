//! Test environment helpers for the job application tracker.
//!
//! Tests configure an in-memory SQLite database through [`TestBuilder`], then
//! use the fixtures exposed on [`TestContext`] to insert records.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::application::factory, TestBuilder, TestContext, TestError};
}
