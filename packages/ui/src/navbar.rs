use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::sidebar::Sidebar;
use crate::{icons, Icon, PORTAL_CSS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Profile", path: "/profile" },
    NavItem { label: "Information", path: "/information" },
    NavItem { label: "Forum", path: "/forum" },
    NavItem { label: "Blog", path: "/blog" },
    NavItem { label: "Gallery", path: "/gallery" },
];

/// Whether the nav entry for `item_path` should be highlighted on `current`.
pub fn is_active(item_path: &str, current: &str) -> bool {
    let current = current.split(['?', '#']).next().unwrap_or_default();
    if item_path == "/" {
        return current == "/";
    }
    current == item_path
        || current
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Navbar(active: String, on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();
    let mut menu_open = use_signal(|| false);
    let user = auth.user();

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_CSS }
        header {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_navigate.call("/".to_string()),
                "HIMTI"
            }
            nav {
                class: "navbar-links",
                for item in NAV_ITEMS.iter().copied() {
                    button {
                        key: "{item.path}",
                        class: if is_active(item.path, &active) { "nav-link active" } else { "nav-link" },
                        onclick: move |_| on_navigate.call(item.path.to_string()),
                        "{item.label}"
                    }
                }
            }
            div {
                class: "navbar-user",
                if let Some(u) = user {
                    button {
                        class: "nav-user",
                        title: "Account settings",
                        onclick: move |_| on_navigate.call("/user".to_string()),
                        if let Some(avatar) = u.avatar() {
                            img { class: "avatar", src: "{avatar}", alt: "Avatar" }
                        } else {
                            Icon { icon: icons::FaCircleUser, width: 22, height: 22 }
                        }
                        span { "{u.display_name()}" }
                    }
                    LogoutButton { class: "btn btn-outline" }
                } else if !auth.loading() {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_navigate.call(api::navigation::LOGIN_PATH.to_string()),
                        "Login"
                    }
                }
            }
            button {
                class: "navbar-burger",
                title: "Menu",
                onclick: move |_| menu_open.set(true),
                Icon { icon: icons::FaBars, width: 20, height: 20 }
            }
        }
        Sidebar {
            open: menu_open(),
            active: active.clone(),
            on_navigate: move |path: String| {
                menu_open.set(false);
                on_navigate.call(path);
            },
            on_close: move |_| menu_open.set(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_matches_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/forum"));
    }

    #[test]
    fn test_sections_match_nested_paths() {
        assert!(is_active("/forum", "/forum"));
        assert!(is_active("/forum", "/forum/42?tab=comments"));
        assert!(!is_active("/forum", "/forums-archive"));
        assert!(!is_active("/blog", "/forum"));
    }
}
