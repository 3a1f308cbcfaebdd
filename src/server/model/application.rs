use chrono::NaiveDate;

use crate::{model::application::JobApplicationDto, server::model::db::JobApplicationModel};

/// A job application that passed creation validation, ready to be inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewJobApplication {
    pub company: String,
    pub url: String,
    pub website: String,
    pub status: String,
    pub applied: NaiveDate,
    pub deadline: NaiveDate,
}

/// Fields to overwrite on an existing job application.
///
/// `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobApplicationChanges {
    pub company: Option<String>,
    pub url: Option<String>,
    pub website: Option<String>,
    pub status: Option<String>,
    pub applied: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
}

impl JobApplicationChanges {
    /// Whether applying these changes would leave a record untouched
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl From<JobApplicationModel> for JobApplicationDto {
    fn from(model: JobApplicationModel) -> Self {
        Self {
            id: model.id,
            company: model.company,
            url: model.url,
            website: model.website,
            status: model.status,
            applied: model.applied,
            deadline: model.deadline,
        }
    }
}
