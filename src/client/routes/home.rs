use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use crate::client::{
    components::{
        ApplicationModal, ApplicationTable, DeleteModal, NotificationToast, Page, Pagination,
    },
    store::application::{ApplicationsState, PendingDelete},
};

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<ApplicationsState>>();

    // Fetch once per page session
    #[cfg(feature = "web")]
    use_hook(|| {
        use crate::client::store::actions;

        spawn(actions::load_applications(state));
    });

    let (form, pending_delete, has_applications) = {
        let current = state.read();
        (
            current.form.clone(),
            current.pending_delete,
            !current.applications.is_empty(),
        )
    };

    rsx!(
        Title { "Job Applications | Jobtrack" }
        Meta {
            name: "description",
            content: "Track the jobs you have applied to, their status and deadlines."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    h1 { class: "text-2xl font-bold",
                        "Job Applications"
                    }
                    div { class: "flex gap-2",
                        button {
                            class: "btn btn-primary flex gap-2",
                            onclick: move |_| state.write().open_add_form(),
                            Icon { width: 16, height: 16, icon: FaPlus }
                            p { "Add Application" }
                        }
                        button {
                            class: "btn btn-outline btn-error flex gap-2",
                            disabled: !has_applications,
                            onclick: move |_| state.write().request_delete(PendingDelete::All),
                            Icon { width: 16, height: 16, icon: FaTrash }
                            p { "Delete All" }
                        }
                    }
                }
                ApplicationTable {}
                Pagination {}
            }
        }
        if let Some(form) = form {
            ApplicationModal { form }
        }
        if let Some(target) = pending_delete {
            DeleteModal { target }
        }
        NotificationToast {}
    )
}
