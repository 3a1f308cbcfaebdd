use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Collection path every job application endpoint is served under
pub const APPLICATIONS_PATH: &str = "/api/applications";

/// A stored job application
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct JobApplicationDto {
    /// Store-assigned identifier
    pub id: i32,
    pub company: String,
    /// Link to the job posting
    pub url: String,
    /// Link to the company site
    pub website: String,
    /// One of `applied`, `rejected`, `noresponse`, `accepted` or `assignment`,
    /// stored as free text
    pub status: String,
    pub applied: NaiveDate,
    pub deadline: NaiveDate,
}

/// Request body for creating or updating a job application.
///
/// Creation requires every field to be present and non-empty. Updates accept
/// any subset; absent or empty fields keep their stored value. Numbers and
/// booleans sent for the text fields are stored as their string form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct JobApplicationRequestDto {
    #[serde(deserialize_with = "scalar_as_string")]
    pub company: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub website: Option<String>,
    #[serde(deserialize_with = "scalar_as_string")]
    pub status: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 date-time
    pub applied: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 date-time
    pub deadline: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

/// Accepts a string or any JSON scalar for a text field, `null` is treated as absent
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;

    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Bool(value) => value.to_string(),
        Scalar::Signed(value) => value.to_string(),
        Scalar::Unsigned(value) => value.to_string(),
        Scalar::Float(value) => value.to_string(),
    }))
}

/// Response for deleting a single job application
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DeletedApplicationDto {
    pub message: String,
    pub deleted_record: JobApplicationDto,
}

/// Response for deleting every job application
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DeletedApplicationsDto {
    pub message: String,
    pub deleted_count: u64,
}

/// Known application statuses.
///
/// The store keeps status as free text, so values outside this set survive a
/// round trip and are rendered with a neutral style by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Rejected,
    NoResponse,
    Accepted,
    Assignment,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Rejected,
        ApplicationStatus::NoResponse,
        ApplicationStatus::Accepted,
        ApplicationStatus::Assignment,
    ];

    /// Value sent over the wire and stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Rejected => "rejected",
            Self::NoResponse => "noresponse",
            Self::Accepted => "accepted",
            Self::Assignment => "assignment",
        }
    }

    /// Human readable label used by the status picker
    pub fn label(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Rejected => "Rejected",
            Self::NoResponse => "No Response",
            Self::Accepted => "Accepted",
            Self::Assignment => "Assignment",
        }
    }

    /// Returns `None` for free-text statuses outside the known set
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
