//! Job application fixture utilities.

pub mod factory;

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, TestContext};

/// Fixture methods for inserting job applications into the test database.
pub struct ApplicationFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> ApplicationFixtures<'a> {
    pub(crate) fn new(test: &'a mut TestContext) -> Self {
        Self { test }
    }

    /// Insert a job application with standard test values for the given company.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted record with its store-assigned ID
    /// - `Err(TestError::DbErr)` - Insert failed, usually because the table is missing
    pub async fn insert_mock_application(
        &mut self,
        company: &str,
    ) -> Result<entity::job_application::Model, TestError> {
        let model = factory::mock_application_model(0, company);

        self.insert_application(
            &model.company,
            &model.status,
            model.applied,
            model.deadline,
        )
        .await
    }

    /// Insert a job application with explicit status and dates.
    pub async fn insert_application(
        &mut self,
        company: &str,
        status: &str,
        applied: NaiveDate,
        deadline: NaiveDate,
    ) -> Result<entity::job_application::Model, TestError> {
        let slug = factory::slug(company);

        let application = entity::job_application::ActiveModel {
            company: ActiveValue::Set(company.to_string()),
            url: ActiveValue::Set(format!("https://jobs.example.com/{}", slug)),
            website: ActiveValue::Set(format!("https://{}.example.com", slug)),
            status: ActiveValue::Set(status.to_string()),
            applied: ActiveValue::Set(applied),
            deadline: ActiveValue::Set(deadline),
            ..Default::default()
        };

        Ok(application.insert(&self.test.db).await?)
    }
}
