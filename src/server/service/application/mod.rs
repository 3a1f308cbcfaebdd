//! Job application service layer.
//!
//! Applies the record lifecycle rules on top of [`JobApplicationRepository`]: creation is
//! validated strictly, updates skip empty fields, malformed IDs are told apart from IDs
//! that match nothing, and bulk deletion of an empty collection is reported as not found.

pub mod validate;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::application::{
        DeletedApplicationDto, DeletedApplicationsDto, JobApplicationDto,
        JobApplicationRequestDto,
    },
    server::{
        data::application::JobApplicationRepository,
        error::{application::ApplicationError, Error},
    },
};

/// Service for managing job applications.
pub struct JobApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobApplicationService<'a> {
    /// Creates a new instance of JobApplicationService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every job application in storage order.
    ///
    /// # Returns
    /// - `Ok(Vec<JobApplicationDto>)` - All job applications, empty if none exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list(&self) -> Result<Vec<JobApplicationDto>, Error> {
        let repo = JobApplicationRepository::new(self.db);

        let applications = repo.get_all().await?;

        Ok(applications
            .into_iter()
            .map(JobApplicationDto::from)
            .collect())
    }

    /// Validates and stores a new job application.
    ///
    /// # Returns
    /// - `Ok(JobApplicationDto)` - The created job application with its assigned ID
    /// - `Err(Error::ApplicationError(Validation))` - Missing field or unparseable date
    /// - `Err(Error::ApplicationError(Store))` - Database operation failed
    pub async fn create(
        &self,
        request: JobApplicationRequestDto,
    ) -> Result<JobApplicationDto, Error> {
        let repo = JobApplicationRepository::new(self.db);

        let new_application = validate::new_application(request)?;

        let application = repo
            .create(new_application)
            .await
            .map_err(|source| ApplicationError::Store {
                action: "creating",
                source,
            })?;

        Ok(application.into())
    }

    /// Retrieves a single job application.
    ///
    /// # Returns
    /// - `Ok(JobApplicationDto)` - The job application
    /// - `Err(Error::ApplicationError(InvalidId))` - `id` is not a well-formed ID
    /// - `Err(Error::ApplicationError(NotFound))` - No job application has this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get(&self, id: &str) -> Result<JobApplicationDto, Error> {
        let repo = JobApplicationRepository::new(self.db);

        let id = validate::application_id(id)?;

        match repo.find_by_id(id).await? {
            Some(application) => Ok(application.into()),
            None => Err(ApplicationError::NotFound(id).into()),
        }
    }

    /// Overwrites the non-empty fields of `request` on an existing job application.
    ///
    /// An unknown ID is reported as not found even when the request's dates are also
    /// invalid. The stored record is read only once on the success path.
    ///
    /// # Returns
    /// - `Ok(JobApplicationDto)` - The updated job application
    /// - `Err(Error::ApplicationError(InvalidId))` - `id` is not a well-formed ID
    /// - `Err(Error::ApplicationError(NotFound))` - No job application has this ID
    /// - `Err(Error::ApplicationError(Validation))` - A supplied date is unparseable
    /// - `Err(Error::ApplicationError(Store))` - Database operation failed
    pub async fn update(
        &self,
        id: &str,
        request: JobApplicationRequestDto,
    ) -> Result<JobApplicationDto, Error> {
        let repo = JobApplicationRepository::new(self.db);
        let store_error = |source| ApplicationError::Store {
            action: "updating",
            source,
        };

        let id = validate::application_id(id)?;
        let changes = match validate::application_changes(request) {
            Ok(changes) => changes,
            Err(err) => {
                if repo.find_by_id(id).await.map_err(store_error)?.is_none() {
                    return Err(ApplicationError::NotFound(id).into());
                }

                return Err(err.into());
            }
        };

        let application = repo
            .update(id, changes)
            .await
            .map_err(store_error)?
            .ok_or(ApplicationError::NotFound(id))?;

        Ok(application.into())
    }

    /// Deletes a single job application.
    ///
    /// # Returns
    /// - `Ok(DeletedApplicationDto)` - Confirmation message with the deleted record
    /// - `Err(Error::ApplicationError(InvalidId))` - `id` is not a well-formed ID
    /// - `Err(Error::ApplicationError(NotFound))` - No job application has this ID
    /// - `Err(Error::ApplicationError(Store))` - Database operation failed
    pub async fn delete(&self, id: &str) -> Result<DeletedApplicationDto, Error> {
        let repo = JobApplicationRepository::new(self.db);

        let id = validate::application_id(id)?;

        let application = repo
            .delete_by_id(id)
            .await
            .map_err(|source| ApplicationError::Store {
                action: "deleting",
                source,
            })?
            .ok_or(ApplicationError::NotFound(id))?;

        Ok(DeletedApplicationDto {
            message: "Job application deleted successfully".to_string(),
            deleted_record: application.into(),
        })
    }

    /// Deletes every job application.
    ///
    /// An already empty collection is an error rather than a zero-count success.
    ///
    /// # Returns
    /// - `Ok(DeletedApplicationsDto)` - Confirmation message with the number deleted
    /// - `Err(Error::ApplicationError(NoneToDelete))` - The collection was empty
    /// - `Err(Error::ApplicationError(Store))` - Database operation failed
    pub async fn delete_all(&self) -> Result<DeletedApplicationsDto, Error> {
        let repo = JobApplicationRepository::new(self.db);

        let deleted_count = repo
            .delete_all()
            .await
            .map_err(|source| ApplicationError::Store {
                action: "deleting",
                source,
            })?;

        if deleted_count == 0 {
            return Err(ApplicationError::NoneToDelete.into());
        }

        Ok(DeletedApplicationsDto {
            message: "All job applications deleted successfully".to_string(),
            deleted_count,
        })
    }
}
