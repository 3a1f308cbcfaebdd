use dioxus::prelude::*;

use crate::client::store::application::{ApplicationsState, PendingDelete};

/// Confirmation modal shown before any delete request is sent
#[component]
pub fn DeleteModal(target: PendingDelete) -> Element {
    let mut state = use_context::<Signal<ApplicationsState>>();

    let message = match target {
        PendingDelete::One(_) => "Are you sure you want to delete this application?",
        PendingDelete::All => "Are you sure you want to delete all applications? This cannot be undone.",
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "font-bold text-lg",
                    "Confirm Delete"
                }
                p { class: "py-4",
                    "{message}"
                }
                div { class: "modal-action",
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| state.write().cancel_delete(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        onclick: move |_| {
                            #[cfg(feature = "web")]
                            {
                                use crate::client::store::actions;

                                spawn(actions::confirm_delete(state, target));
                            }
                        },
                        "Delete"
                    }
                }
            }
        }
    )
}
