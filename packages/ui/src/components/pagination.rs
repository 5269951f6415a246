use dioxus::prelude::*;
use store::PageControls;

/// Previous/next buttons plus one button per page.
///
/// Renders nothing when there is a single page.
#[component]
pub fn Pagination(current: u32, total: u32, on_change: EventHandler<u32>) -> Element {
    let controls = PageControls::new(current, total);
    if !controls.is_visible() {
        return rsx! {};
    }
    let previous = controls.previous();
    let next = controls.next();

    rsx! {
        nav {
            class: "pagination",
            button {
                class: "page-btn",
                disabled: !controls.has_previous(),
                onclick: move |_| {
                    if let Some(page) = previous {
                        on_change.call(page);
                    }
                },
                "Previous"
            }
            for page in controls.pages() {
                button {
                    key: "{page}",
                    class: if page == controls.current() { "page-btn active" } else { "page-btn" },
                    onclick: move |_| on_change.call(page),
                    "{page}"
                }
            }
            button {
                class: "page-btn",
                disabled: !controls.has_next(),
                onclick: move |_| {
                    if let Some(page) = next {
                        on_change.call(page);
                    }
                },
                "Next"
            }
        }
    }
}
