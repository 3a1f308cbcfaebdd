use dioxus::prelude::*;

use crate::client::store::application::ApplicationsState;

#[component]
pub fn Pagination() -> Element {
    let mut state = use_context::<Signal<ApplicationsState>>();

    let (current_page, total_pages) = {
        let current = state.read();
        (current.current_page, current.total_pages())
    };

    if total_pages <= 1 {
        return rsx!();
    }

    rsx!(
        div { class: "join flex justify-center mt-4",
            button {
                class: "join-item btn btn-sm",
                disabled: current_page <= 1,
                onclick: move |_| state.write().go_to_page(current_page.saturating_sub(1)),
                "«"
            }
            for page in 1..=total_pages {
                button {
                    key: "{page}",
                    class: if page == current_page { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                    onclick: move |_| state.write().go_to_page(page),
                    "{page}"
                }
            }
            button {
                class: "join-item btn btn-sm",
                disabled: current_page >= total_pages,
                onclick: move |_| state.write().go_to_page(current_page + 1),
                "»"
            }
        }
    )
}
