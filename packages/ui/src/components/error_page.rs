use dioxus::prelude::*;

use crate::icons;
use crate::Icon;

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
            p { class: "spinner-label", "{label}" }
        }
    }
}

/// Inline error with an optional retry button.
#[component]
pub fn ErrorMessage(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "error-box",
            Icon { icon: icons::FaTriangleExclamation, width: 18, height: 18 }
            p { "{message}" }
            if let Some(on_retry) = on_retry {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
            }
        }
    }
}

/// Full-page status screen used by the 403, 404 and 500 routes.
#[component]
pub fn StatusPage(code: u16, title: String, message: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        section {
            class: "status-page",
            h1 { class: "status-code", "{code}" }
            h2 { "{title}" }
            p { "{message}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_home.call(()),
                "Back to home"
            }
        }
    }
}
