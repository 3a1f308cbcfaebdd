use dioxus::prelude::*;

use crate::client::store::application::{ApplicationsState, NotificationKind};

#[component]
pub fn NotificationToast() -> Element {
    let mut state = use_context::<Signal<ApplicationsState>>();

    let Some(notification) = state.read().notification.clone() else {
        return rsx!();
    };

    let class = match notification.kind {
        NotificationKind::Success => "alert alert-success",
        NotificationKind::Error => "alert alert-error",
    };

    rsx!(
        div { class: "toast toast-top toast-end",
            div { class: "{class}",
                span { "{notification.message}" }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| state.write().dismiss_notification(),
                    "✕"
                }
            }
        }
    )
}
