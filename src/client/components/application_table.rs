use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::StatusBadge,
        store::application::{ApplicationsState, PendingDelete},
    },
    model::application::JobApplicationDto,
};

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Table of the job applications on the current page
#[component]
pub fn ApplicationTable() -> Element {
    let mut state = use_context::<Signal<ApplicationsState>>();

    let (rows, fetched) = {
        let current = state.read();
        let rows: Vec<(usize, i32, JobApplicationDto)> = current
            .current_page_applications()
            .iter()
            .enumerate()
            .map(|(index, application)| {
                (current.row_number(index), application.id, application.clone())
            })
            .collect();

        (rows, current.fetched)
    };

    rsx!(
        div { class: "overflow-x-auto shadow-md rounded-lg",
            table { class: "table table-md w-full",
                thead {
                    tr {
                        th { "#" }
                        th { "Company" }
                        th { "Status" }
                        th { "Applied" }
                        th { "Deadline" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { colspan: 6, class: "text-center",
                                if fetched { "No applications yet" } else { "Loading applications..." }
                            }
                        }
                    }
                    for (number, id, application) in rows {
                        tr { key: "{id}",
                            td { "{number}" }
                            th {
                                a {
                                    class: "link link-primary font-medium",
                                    href: "{application.url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{application.company}"
                                }
                            }
                            td {
                                StatusBadge { status: application.status.clone() }
                            }
                            td { {format_date(application.applied)} }
                            td { {format_date(application.deadline)} }
                            td { class: "space-x-4",
                                button {
                                    class: "text-yellow-500 hover:text-yellow-600",
                                    onclick: move |_| state.write().open_edit_form(id),
                                    Icon { width: 16, height: 16, icon: FaPenToSquare }
                                }
                                button {
                                    class: "text-red-500 hover:text-red-600",
                                    onclick: move |_| state.write().request_delete(PendingDelete::One(id)),
                                    Icon { width: 16, height: 16, icon: FaTrash }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
