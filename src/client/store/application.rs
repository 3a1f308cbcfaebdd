//! Client-side state for the job application page.
//!
//! [`ApplicationsState`] mirrors the collection returned by the last successful fetch and
//! is patched in place from the server's responses to create, update and delete requests.
//! Failed requests never touch the cached records; they only raise a notification.
//! Pagination is a slice over the cache, the server is always asked for everything.

use crate::model::application::{ApplicationStatus, JobApplicationDto, JobApplicationRequestDto};

/// Number of job applications shown per page
pub const PAGE_SIZE: usize = 10;

/// Whether the form creates a new job application or edits an existing one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(i32),
}

/// Editable fields of the job application form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Company,
    Url,
    Website,
    Status,
    Applied,
    Deadline,
}

/// Values typed into the add/edit modal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationForm {
    pub mode: FormMode,
    pub company: String,
    pub url: String,
    pub website: String,
    pub status: String,
    pub applied: String,
    pub deadline: String,
}

impl ApplicationForm {
    /// Blank form for a new job application, status defaults to `applied`
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            company: String::new(),
            url: String::new(),
            website: String::new(),
            status: ApplicationStatus::default().as_str().to_string(),
            applied: String::new(),
            deadline: String::new(),
        }
    }

    /// Form pre-filled from a cached job application, dates as `YYYY-MM-DD`
    pub fn edit(application: &JobApplicationDto) -> Self {
        Self {
            mode: FormMode::Edit(application.id),
            company: application.company.clone(),
            url: application.url.clone(),
            website: application.website.clone(),
            status: application.status.clone(),
            applied: application.applied.format("%Y-%m-%d").to_string(),
            deadline: application.deadline.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Company => &self.company,
            FormField::Url => &self.url,
            FormField::Website => &self.website,
            FormField::Status => &self.status,
            FormField::Applied => &self.applied,
            FormField::Deadline => &self.deadline,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Company => &mut self.company,
            FormField::Url => &mut self.url,
            FormField::Website => &mut self.website,
            FormField::Status => &mut self.status,
            FormField::Applied => &mut self.applied,
            FormField::Deadline => &mut self.deadline,
        };
        *slot = value;
    }

    /// Request body carrying every field as typed.
    ///
    /// Empty values are sent as-is: creation rejects them, updates keep the stored value.
    pub fn to_request(&self) -> JobApplicationRequestDto {
        JobApplicationRequestDto {
            company: Some(self.company.clone()),
            url: Some(self.url.clone()),
            website: Some(self.website.clone()),
            status: Some(self.status.clone()),
            applied: Some(self.applied.clone()),
            deadline: Some(self.deadline.clone()),
        }
    }
}

/// Target of the delete confirmation modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingDelete {
    One(i32),
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message shown after a request completes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// State owned by one job application page session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationsState {
    /// Records from the last successful fetch, patched by later responses
    pub applications: Vec<JobApplicationDto>,
    /// Whether the initial fetch has completed, successfully or not
    pub fetched: bool,
    /// 1-based page cursor
    pub current_page: usize,
    /// Open add/edit modal
    pub form: Option<ApplicationForm>,
    /// Open delete confirmation modal
    pub pending_delete: Option<PendingDelete>,
    pub notification: Option<Notification>,
}

impl Default for ApplicationsState {
    fn default() -> Self {
        Self {
            applications: Vec::new(),
            fetched: false,
            current_page: 1,
            form: None,
            pending_delete: None,
            notification: None,
        }
    }
}

impl ApplicationsState {
    /// Replaces the cache with a freshly fetched collection
    pub fn set_applications(&mut self, applications: Vec<JobApplicationDto>) {
        self.applications = applications;
        self.fetched = true;
        self.clamp_page();
    }

    /// Marks the initial fetch as done without touching the cache
    pub fn fetch_failed(&mut self) {
        self.fetched = true;
        self.notify_error("Failed to load applications.");
    }

    pub fn open_add_form(&mut self) {
        self.form = Some(ApplicationForm::add());
    }

    /// Opens the edit modal for a cached job application, ignored for unknown IDs
    pub fn open_edit_form(&mut self, id: i32) {
        if let Some(application) = self.applications.iter().find(|a| a.id == id) {
            self.form = Some(ApplicationForm::edit(application));
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn update_form(&mut self, field: FormField, value: String) {
        if let Some(form) = self.form.as_mut() {
            form.set(field, value);
        }
    }

    /// Appends the server's copy of a created job application
    pub fn application_created(&mut self, application: JobApplicationDto) {
        self.applications.push(application);
        self.form = None;
        self.notify_success("Application added successfully!");
    }

    /// Replaces the cached job application with the server's updated copy
    pub fn application_updated(&mut self, application: JobApplicationDto) {
        if let Some(cached) = self.applications.iter_mut().find(|a| a.id == application.id) {
            *cached = application;
        }
        self.form = None;
        self.notify_success("Application updated successfully!");
    }

    pub fn request_delete(&mut self, target: PendingDelete) {
        self.pending_delete = Some(target);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Removes a deleted job application from the cache
    pub fn application_deleted(&mut self, id: i32) {
        self.applications.retain(|a| a.id != id);
        self.pending_delete = None;
        self.clamp_page();
        self.notify_success("Application deleted successfully!");
    }

    /// Empties the cache after a successful bulk delete
    pub fn applications_cleared(&mut self, deleted_count: u64) {
        self.applications.clear();
        self.pending_delete = None;
        self.current_page = 1;
        self.notify_success(&format!("Deleted {} application(s).", deleted_count));
    }

    /// Reports a failed request, the cache and open modals are left as they are
    pub fn request_failed(&mut self, message: &str) {
        self.notify_error(message);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn total_pages(&self) -> usize {
        self.applications.len().div_ceil(PAGE_SIZE)
    }

    /// Job applications visible on the current page
    pub fn current_page_applications(&self) -> &[JobApplicationDto] {
        let start = ((self.current_page - 1) * PAGE_SIZE).min(self.applications.len());
        let end = (start + PAGE_SIZE).min(self.applications.len());

        &self.applications[start..end]
    }

    /// Moves to `page`, clamped to the available pages
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    /// 1-based position of a row across all pages
    pub fn row_number(&self, index: usize) -> usize {
        (self.current_page - 1) * PAGE_SIZE + index + 1
    }

    fn clamp_page(&mut self) {
        self.go_to_page(self.current_page);
    }

    fn notify_success(&mut self, message: &str) {
        self.notification = Some(Notification {
            kind: NotificationKind::Success,
            message: message.to_string(),
        });
    }

    fn notify_error(&mut self, message: &str) {
        self.notification = Some(Notification {
            kind: NotificationKind::Error,
            message: message.to_string(),
        });
    }
}
