use dioxus::prelude::*;

use crate::{
    client::store::application::{ApplicationForm, ApplicationsState, FormField, FormMode},
    model::application::ApplicationStatus,
};

/// Text inputs of the form in display order, status is rendered separately as a select
const TEXT_FIELDS: [(FormField, &str, &str); 5] = [
    (FormField::Company, "Company", "text"),
    (FormField::Url, "Job URL", "url"),
    (FormField::Website, "Company Website", "url"),
    (FormField::Applied, "Applied", "date"),
    (FormField::Deadline, "Deadline", "date"),
];

/// Add/edit modal for a job application
#[component]
pub fn ApplicationModal(form: ApplicationForm) -> Element {
    let mut state = use_context::<Signal<ApplicationsState>>();

    let title = match form.mode {
        FormMode::Add => "Add Application",
        FormMode::Edit(_) => "Edit Application",
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                h3 { class: "font-bold text-lg mb-4",
                    "{title}"
                }
                form {
                    class: "flex flex-col gap-3",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();

                        #[cfg(feature = "web")]
                        {
                            use crate::client::store::actions;

                            let submitted = state.read().form.clone();
                            if let Some(form) = submitted {
                                spawn(actions::submit_form(state, form));
                            }
                        }
                    },
                    for (field, label, input_type) in TEXT_FIELDS {
                        label { key: "{label}", class: "form-control w-full",
                            span { class: "label-text", "{label}" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: input_type,
                                value: "{form.value(field)}",
                                oninput: move |evt| state.write().update_form(field, evt.value()),
                            }
                        }
                    }
                    label { class: "form-control w-full",
                        span { class: "label-text", "Status" }
                        select {
                            class: "select select-bordered w-full",
                            onchange: move |evt| state.write().update_form(FormField::Status, evt.value()),
                            for status in ApplicationStatus::ALL {
                                option {
                                    key: "{status}",
                                    value: status.as_str(),
                                    selected: form.status == status.as_str(),
                                    {status.label()}
                                }
                            }
                        }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| state.write().close_form(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            "Save"
                        }
                    }
                }
            }
        }
    )
}
