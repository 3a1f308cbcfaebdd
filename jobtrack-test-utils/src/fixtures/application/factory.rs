//! Factory functions for generating mock job application models.
//!
//! These are in-memory model instances that don't require database
//! interaction, suitable for unit tests.

use chrono::NaiveDate;

/// Date every mock application was applied on
pub fn mock_applied_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Deadline every mock application carries
pub fn mock_deadline_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
}

/// Lowercase, dash separated form of a company name used in mock links
pub fn slug(company: &str) -> String {
    company
        .split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Create a mock job application database model for testing.
///
/// # Arguments
/// - `id` - Record ID to assign
/// - `company` - Company name, also used to derive the mock links
pub fn mock_application_model(id: i32, company: &str) -> entity::job_application::Model {
    let slug = slug(company);

    entity::job_application::Model {
        id,
        company: company.to_string(),
        url: format!("https://jobs.example.com/{}", slug),
        website: format!("https://{}.example.com", slug),
        status: "applied".to_string(),
        applied: mock_applied_date(),
        deadline: mock_deadline_date(),
    }
}
