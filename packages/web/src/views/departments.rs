use api::Department;
use dioxus::prelude::*;
use ui::components::{DivisionSection, ErrorMessage, Spinner};
use ui::{icons, use_api, use_client, Icon};

use crate::Route;

pub(crate) const BPH_SLUG: &str = "bph";

/// `/bph` shows the board like any other department.
#[component]
pub fn Bph() -> Element {
    rsx! {
        DepartmentDetail { slug: BPH_SLUG.to_string() }
    }
}

#[component]
pub fn DepartmentDetail(slug: String) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let department = use_api::<Option<Department>>();
    let mut active_tab = use_signal(|| None::<String>);
    // Track the slug in a signal so use_resource re-runs on route param change
    let mut slug_signal = use_signal(|| slug.clone());
    if *slug_signal.peek() != slug {
        slug_signal.set(slug.clone());
    }

    let mut loader = use_resource(move || {
        let client = client.clone();
        let slug = slug_signal();
        async move {
            active_tab.set(None);
            department
                .execute(api::departments::by_slug(&client, &slug))
                .await;
        }
    });

    if department.loading() || loader.read().is_none() {
        return rsx! {
            Spinner { label: "Loading department..." }
        };
    }
    if let Some(error) = department.error() {
        return rsx! {
            ErrorMessage { message: error, on_retry: move |_| loader.restart() }
        };
    }
    let Some(dept) = department.data().flatten() else {
        return rsx! {
            section {
                class: "container center",
                h1 { class: "page-title", "Department Not Found" }
                p { class: "muted", "Department \"{slug}\" not found" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push(Route::Home {});
                    },
                    "Return to Home"
                }
            }
        };
    };

    let (with_members, without_members) = dept.grouped_divisions();
    let divisions: Vec<_> = with_members
        .into_iter()
        .chain(without_members)
        .cloned()
        .collect();
    let selected = active_tab()
        .and_then(|id| divisions.iter().find(|d| d.id == id).cloned())
        .or_else(|| divisions.first().cloned());

    rsx! {
        section {
            class: "container",
            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::Home {});
                },
                Icon { icon: icons::FaChevronLeft, width: 12, height: 12 }
                " Back to home"
            }
            div {
                class: "department-header",
                h1 { class: "page-title", "{dept.department}" }
                p {
                    class: "muted",
                    Icon { icon: icons::FaUsers, width: 16, height: 16 }
                    " Select a division to view team members"
                }
            }
            if divisions.is_empty() {
                p { class: "empty-state", "No divisions found in this department" }
            } else {
                div {
                    class: "tabs",
                    for division in divisions.iter() {
                        button {
                            key: "{division.id}",
                            class: if selected.as_ref().is_some_and(|s| s.id == division.id) { "tab active" } else { "tab" },
                            onclick: {
                                let id = division.id.clone();
                                move |_| active_tab.set(Some(id.clone()))
                            },
                            "{division.division}"
                            if !division.members.is_empty() {
                                span { class: "tab-count", "{division.members.len()}" }
                            }
                        }
                    }
                }
                if let Some(division) = selected {
                    DivisionSection { division }
                }
            }
        }
    }
}
