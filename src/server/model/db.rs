//! Database model type aliases.
//!
//! Provides a single point of reference for SeaORM model types so the rest of the server
//! does not import from the `entity` crate directly.

/// Type alias for the job application database model.
///
/// # Fields (from `entity::job_application::Model`)
/// - `id` - Primary key, assigned by the database on insert
/// - `company` - Company name
/// - `url` - Link to the job posting
/// - `website` - Link to the company site
/// - `status` - Free text application status
/// - `applied` - Date the application was sent
/// - `deadline` - Application deadline
pub type JobApplicationModel = entity::job_application::Model;
