//! Request validation for job applications.
//!
//! Creation is strict: all six business fields must be present and non-empty. Updates are
//! lenient: absent or empty fields are dropped so the stored value survives. Dates are
//! accepted as `YYYY-MM-DD` or as an RFC 3339 date-time, of which the UTC date is kept.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::application::JobApplicationRequestDto,
    server::{
        error::{application::ApplicationError, validation::ValidationError},
        model::application::{JobApplicationChanges, NewJobApplication},
    },
};

/// Validates a creation request.
///
/// # Returns
/// - `Ok(NewJobApplication)` - Every field present with parseable dates
/// - `Err(ValidationError::MissingFields)` - Lists every absent or empty field
/// - `Err(ValidationError::InvalidDate)` - `applied` or `deadline` is not a date
pub fn new_application(
    request: JobApplicationRequestDto,
) -> Result<NewJobApplication, ValidationError> {
    let company = non_empty(request.company);
    let url = non_empty(request.url);
    let website = non_empty(request.website);
    let status = non_empty(request.status);
    let applied = non_empty(request.applied);
    let deadline = non_empty(request.deadline);

    let missing: Vec<&'static str> = [
        ("company", company.is_none()),
        ("url", url.is_none()),
        ("website", website.is_none()),
        ("status", status.is_none()),
        ("applied", applied.is_none()),
        ("deadline", deadline.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, is_missing)| is_missing.then_some(field))
    .collect();

    match (company, url, website, status, applied, deadline) {
        (
            Some(company),
            Some(url),
            Some(website),
            Some(status),
            Some(applied),
            Some(deadline),
        ) => Ok(NewJobApplication {
            company,
            url,
            website,
            status,
            applied: parse_date("applied", &applied)?,
            deadline: parse_date("deadline", &deadline)?,
        }),
        _ => Err(ValidationError::MissingFields(missing)),
    }
}

/// Validates an update request, dropping absent and empty fields.
///
/// No completeness check is made; an empty request yields empty changes.
pub fn application_changes(
    request: JobApplicationRequestDto,
) -> Result<JobApplicationChanges, ValidationError> {
    let applied = non_empty(request.applied)
        .map(|value| parse_date("applied", &value))
        .transpose()?;
    let deadline = non_empty(request.deadline)
        .map(|value| parse_date("deadline", &value))
        .transpose()?;

    Ok(JobApplicationChanges {
        company: non_empty(request.company),
        url: non_empty(request.url),
        website: non_empty(request.website),
        status: non_empty(request.status),
        applied,
        deadline,
    })
}

/// Parses a job application ID from a path segment.
///
/// Well-formed IDs are positive decimal integers without sign or whitespace.
pub fn application_id(raw: &str) -> Result<i32, ApplicationError> {
    let invalid = || ApplicationError::InvalidId(raw.to_string());

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(invalid)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| {
            DateTime::parse_from_rfc3339(value).map(|date| date.with_timezone(&Utc).date_naive())
        })
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: value.to_string(),
        })
}
