use dioxus::prelude::*;

/// Full height page body below the fixed navbar
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        main {
            class: "min-h-screen p-4 {class}",
            {children}
        }
    )
}
