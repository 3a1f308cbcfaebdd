use dioxus::prelude::*;

use crate::model::application::ApplicationStatus;

/// Badge colours for a status, free-text statuses get a neutral style
pub fn status_class(status: &str) -> &'static str {
    match ApplicationStatus::parse(status) {
        Some(ApplicationStatus::Applied) => "bg-blue-500 text-white",
        Some(ApplicationStatus::Rejected) => "bg-red-500 text-white",
        Some(ApplicationStatus::NoResponse) => "bg-gray-500 text-white",
        Some(ApplicationStatus::Accepted) => "bg-green-500 text-white",
        Some(ApplicationStatus::Assignment) => "bg-yellow-500 text-black",
        None => "bg-gray-200 text-black",
    }
}

#[component]
pub fn StatusBadge(status: String) -> Element {
    let class = status_class(&status);

    rsx!(
        span { class: "px-3 py-1 rounded-full {class}",
            "{status}"
        }
    )
}
