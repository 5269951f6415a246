use api::gallery::PAGE_SIZE;
use api::{EventGallery, GalleryEvent, Paginated};
use dioxus::prelude::*;
use ui::components::{ErrorMessage, EventCard, Pagination, Spinner};
use ui::{icons, use_api, use_client, Icon};

use crate::Route;

#[component]
pub fn Gallery() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let events = use_api::<Paginated<GalleryEvent>>();
    let mut page = use_signal(|| 1u32);

    let mut loader = use_resource(move || {
        let client = client.clone();
        let page = page();
        async move {
            events
                .execute(api::gallery::list(&client, page, PAGE_SIZE))
                .await;
        }
    });

    rsx! {
        section {
            class: "container",
            h1 { class: "page-title", "Gallery" }
            if let Some(error) = events.error() {
                ErrorMessage { message: error, on_retry: move |_| loader.restart() }
            } else if let Some(result) = events.data() {
                if result.data.is_empty() {
                    p { class: "empty-state", "No events yet." }
                }
                div {
                    class: "grid grid-4",
                    for event in result.data {
                        EventCard {
                            key: "{event.id}",
                            on_open: {
                                let id = event.id.clone();
                                move |_| {
                                    nav.push(Route::EventPhotos { id: id.clone() });
                                }
                            },
                            event,
                        }
                    }
                }
                Pagination {
                    current: result.meta.current(),
                    total: result.meta.total(),
                    on_change: move |next: u32| page.set(next),
                }
            } else {
                Spinner {}
            }
        }
    }
}

/// Every photo of one event, with a full-size viewer.
#[component]
pub fn EventPhotos(id: String) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let gallery = use_api::<EventGallery>();
    let mut viewing = use_signal(|| None::<String>);

    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut loader = use_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move {
            gallery
                .execute(api::gallery::event_gallery(&client, &id))
                .await;
        }
    });

    if let Some(error) = gallery.error() {
        return rsx! {
            ErrorMessage { message: error, on_retry: move |_| loader.restart() }
        };
    }
    let Some(event) = gallery.data() else {
        return rsx! {
            Spinner {}
        };
    };
    let photos: Vec<_> = event
        .gallery
        .iter()
        .filter(|item| !item.photo_url.is_empty())
        .cloned()
        .collect();

    rsx! {
        section {
            class: "container",
            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::Gallery {});
                },
                Icon { icon: icons::FaArrowLeft, width: 12, height: 12 }
                " Back to Gallery"
            }
            h1 { class: "page-title", "{event.name}" }
            if photos.is_empty() {
                p { class: "empty-state", "No photos found for this event." }
            }
            div {
                class: "grid grid-4",
                for item in photos {
                    button {
                        key: "{item.id}",
                        class: "photo",
                        onclick: {
                            let url = item.photo_url.clone();
                            move |_| viewing.set(Some(url.clone()))
                        },
                        img { src: "{item.photo_url}", alt: "Photo from {event.name}" }
                    }
                }
            }
            if let Some(url) = viewing() {
                div {
                    class: "lightbox",
                    onclick: move |_| viewing.set(None),
                    img { src: "{url}", alt: "{event.name}" }
                    button {
                        class: "lightbox-close",
                        aria_label: "Close",
                        Icon { icon: icons::FaXmark, width: 20, height: 20 }
                    }
                }
            }
        }
    }
}
