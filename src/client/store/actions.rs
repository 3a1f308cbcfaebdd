//! Requests issued on behalf of the job application page.
//!
//! Each action awaits the API and then reconciles [`ApplicationsState`] with the outcome.
//! There is no timeout: a request that never completes leaves the page waiting.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    store::application::{ApplicationForm, ApplicationsState, FormMode, PendingDelete},
    util::application_api,
};

/// Fetch the whole collection and replace the cache
pub async fn load_applications(mut state: Signal<ApplicationsState>) {
    match application_api::get_applications().await {
        Ok(applications) => state.write().set_applications(applications),
        Err(err) => {
            tracing::error!("Error fetching applications: {}", err);
            state.write().fetch_failed();
        }
    }
}

/// Create or update a job application from the submitted form
pub async fn submit_form(mut state: Signal<ApplicationsState>, form: ApplicationForm) {
    let request = form.to_request();

    match form.mode {
        FormMode::Add => match application_api::create_application(&request).await {
            Ok(created) => state.write().application_created(created),
            Err(err) => {
                tracing::error!("Error adding application: {}", err);
                state.write().request_failed("Failed to add application.");
            }
        },
        FormMode::Edit(id) => match application_api::update_application(id, &request).await {
            Ok(updated) => state.write().application_updated(updated),
            Err(err) => {
                tracing::error!("Error updating application {}: {}", id, err);
                state.write().request_failed("Failed to update application.");
            }
        },
    }
}

/// Carry out a confirmed delete
pub async fn confirm_delete(mut state: Signal<ApplicationsState>, target: PendingDelete) {
    match target {
        PendingDelete::One(id) => match application_api::delete_application(id).await {
            Ok(deleted) => state.write().application_deleted(deleted.deleted_record.id),
            Err(err) => {
                tracing::error!("Error deleting application {}: {}", id, err);
                state.write().request_failed("Failed to delete application.");
            }
        },
        PendingDelete::All => match application_api::delete_all_applications().await {
            Ok(deleted) => state.write().applications_cleared(deleted.deleted_count),
            Err(err) => {
                tracing::error!("Error deleting all applications: {}", err);
                state.write().request_failed("Failed to delete applications.");
            }
        },
    }
}
