
use jobtrack_test_utils::prelude::*;

use crate::{
    model::application::{JobApplicationDto, JobApplicationRequestDto},
    server::error::Error,
};

fn acme_request() -> JobApplicationRequestDto {
    JobApplicationRequestDto {
        company: Some("Acme".to_string()),
        url: Some("http://a".to_string()),
        website: Some("http://a.com".to_string()),
        status: Some("applied".to_string()),
        applied: Some("2024-01-01".to_string()),
        deadline: Some("2024-02-01".to_string()),
    }
}
