//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with the job application
/// table and fixtures. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
#[derive(Default)]
pub struct TestBuilder {
    include_application_table: bool,

    // Companies of job applications to insert, in insertion order
    applications: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the job application table to the test database.
    pub fn with_application_table(mut self) -> Self {
        self.include_application_table = true;
        self
    }

    /// Insert a mock job application for the given company.
    ///
    /// Implies [`Self::with_application_table`].
    pub fn with_mock_application(mut self, company: &str) -> Self {
        self.include_application_table = true;
        self.applications.push(company.to_string());
        self
    }

    /// Insert `count` mock job applications named `Company 1` through `Company {count}`.
    ///
    /// Implies [`Self::with_application_table`].
    pub fn with_mock_applications(mut self, count: usize) -> Self {
        self.include_application_table = true;
        self.applications
            .extend((1..=count).map(|n| format!("Company {}", n)));
        self
    }

    /// Build the test context.
    ///
    /// Creates the in-memory database, executes the queued table statements and
    /// inserts the queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready to use test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        if self.include_application_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            test.with_tables(vec![
                schema.create_table_from_entity(entity::prelude::JobApplication)
            ])
            .await?;
        }

        for company in self.applications {
            test.application().insert_mock_application(&company).await?;
        }

        Ok(test)
    }
}
