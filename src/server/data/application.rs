use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::{
    application::{JobApplicationChanges, NewJobApplication},
    db::JobApplicationModel,
};

pub struct JobApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobApplicationRepository<'a, C> {
    /// Creates a new instance of [`JobApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new job application, the database assigns its ID
    pub async fn create(
        &self,
        application: NewJobApplication,
    ) -> Result<JobApplicationModel, DbErr> {
        let application = entity::job_application::ActiveModel {
            company: ActiveValue::Set(application.company),
            url: ActiveValue::Set(application.url),
            website: ActiveValue::Set(application.website),
            status: ActiveValue::Set(application.status),
            applied: ActiveValue::Set(application.applied),
            deadline: ActiveValue::Set(application.deadline),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    /// Returns every job application in insertion order
    pub async fn get_all(&self) -> Result<Vec<JobApplicationModel>, DbErr> {
        entity::prelude::JobApplication::find()
            .order_by_asc(entity::job_application::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<JobApplicationModel>, DbErr> {
        entity::prelude::JobApplication::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Overwrites the fields present in `changes`, leaving the rest untouched
    ///
    /// Returns `Ok(None)` if no job application has the provided ID.
    pub async fn update(
        &self,
        id: i32,
        changes: JobApplicationChanges,
    ) -> Result<Option<JobApplicationModel>, DbErr> {
        let application = match self.find_by_id(id).await? {
            Some(application) => application,
            None => return Ok(None),
        };

        if changes.is_empty() {
            return Ok(Some(application));
        }

        let mut application_am = application.into_active_model();

        if let Some(company) = changes.company {
            application_am.company = ActiveValue::Set(company);
        }
        if let Some(url) = changes.url {
            application_am.url = ActiveValue::Set(url);
        }
        if let Some(website) = changes.website {
            application_am.website = ActiveValue::Set(website);
        }
        if let Some(status) = changes.status {
            application_am.status = ActiveValue::Set(status);
        }
        if let Some(applied) = changes.applied {
            application_am.applied = ActiveValue::Set(applied);
        }
        if let Some(deadline) = changes.deadline {
            application_am.deadline = ActiveValue::Set(deadline);
        }

        let application = application_am.update(self.db).await?;

        Ok(Some(application))
    }

    /// Deletes a job application, returning the deleted record
    ///
    /// Returns `Ok(None)` if no job application has the provided ID.
    pub async fn delete_by_id(&self, id: i32) -> Result<Option<JobApplicationModel>, DbErr> {
        let application = match self.find_by_id(id).await? {
            Some(application) => application,
            None => return Ok(None),
        };

        entity::prelude::JobApplication::delete_by_id(application.id)
            .exec(self.db)
            .await?;

        Ok(Some(application))
    }

    /// Deletes every job application, returning how many rows were removed
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::JobApplication::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
