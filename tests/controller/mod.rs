//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments; these tests verify the status
//! code each outcome maps to and the shape of the response body.


use jobtrack_test_utils::prelude::*;

use crate::util::{acme_request, json_body};
