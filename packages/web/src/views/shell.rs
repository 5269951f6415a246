use dioxus::prelude::*;
use ui::components::Footer;
use ui::Navbar;

use crate::{go_to, Route};

/// Navbar, page and footer around every non-auth route.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        Navbar {
            active: route.to_string(),
            on_navigate: move |path: String| go_to(nav, &path),
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
