use dioxus::prelude::*;

use crate::client::{router::Route, store::application::ApplicationsState};

const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ApplicationsState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        Router::<Route> {}
    }
}
