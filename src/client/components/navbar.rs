use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    p { class: "text-xl",
                        "Jobtrack"
                    }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button {
                        class: "btn btn-ghost btn-sm",
                        "API Docs"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
