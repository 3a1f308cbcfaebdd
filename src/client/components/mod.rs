pub mod application_modal;
pub mod application_table;
pub mod delete_modal;
pub mod navbar;
pub mod notification;
pub mod page;
pub mod pagination;
pub mod status_badge;

pub use application_modal::ApplicationModal;
pub use application_table::ApplicationTable;
pub use delete_modal::DeleteModal;
pub use navbar::Navbar;
pub use notification::NotificationToast;
pub use page::Page;
pub use pagination::Pagination;
pub use status_badge::StatusBadge;
