use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::navbar::{is_active, NAV_ITEMS};
use crate::{icons, Icon};

/// Slide-over menu for narrow screens.
#[component]
pub fn Sidebar(
    open: bool,
    active: String,
    on_navigate: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    if !open {
        return rsx! {};
    }
    let user = auth.user();

    rsx! {
        div {
            class: "sidebar-backdrop",
            onclick: move |_| on_close.call(()),
        }
        aside {
            class: "sidebar",
            div {
                class: "sidebar-header",
                if let Some(ref u) = user {
                    span { class: "sidebar-user-name", "{u.display_name()}" }
                } else {
                    span { class: "sidebar-user-name", "HIMTI" }
                }
                button {
                    class: "sidebar-close",
                    title: "Close menu",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: icons::FaXmark, width: 18, height: 18 }
                }
            }
            nav {
                class: "sidebar-links",
                for item in NAV_ITEMS.iter().copied() {
                    button {
                        key: "{item.path}",
                        class: if is_active(item.path, &active) { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(item.path.to_string()),
                        "{item.label}"
                    }
                }
            }
            div {
                class: "sidebar-bottom",
                if user.is_some() {
                    button {
                        class: "sidebar-item",
                        onclick: move |_| on_navigate.call("/user".to_string()),
                        "Settings"
                    }
                    LogoutButton { label: "Log out", class: "sidebar-item" }
                } else {
                    button {
                        class: "sidebar-item",
                        onclick: move |_| on_navigate.call(api::navigation::LOGIN_PATH.to_string()),
                        "Login"
                    }
                }
            }
        }
    }
}
