use dioxus::prelude::*;
use ui::components::StatusPage;

use crate::Route;

#[component]
pub fn Forbidden() -> Element {
    let nav = use_navigator();
    rsx! {
        StatusPage {
            code: 403,
            title: "Access denied",
            message: "You do not have permission to view this page.",
            on_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

#[component]
pub fn NotFoundPage() -> Element {
    let nav = use_navigator();
    rsx! {
        StatusPage {
            code: 404,
            title: "Page not found",
            message: "The page you are looking for does not exist or has been moved.",
            on_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

#[component]
pub fn ServerError() -> Element {
    let nav = use_navigator();
    rsx! {
        StatusPage {
            code: 500,
            title: "Something went wrong",
            message: "The server ran into a problem. Please try again later.",
            on_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}

/// Catch-all for paths no route matches.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No page at /{}", segments.join("/"));
    rsx! {
        NotFoundPage {}
    }
}
