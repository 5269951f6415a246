use api::{Article, GalleryEvent, Paginated};
use dioxus::prelude::*;
use ui::components::{ArticleCard, ErrorMessage, Spinner};
use ui::{use_api, use_client, use_departments};

use crate::Route;

const HOME_ARTICLES: u32 = 4;
const HOME_EVENTS: u32 = 2;
const HOME_PHOTOS: usize = 8;

struct Highlight {
    title: &'static str,
    date: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Open Recruitment Panitia PBAK Jurusan 2022",
        date: "29 Juli 2022",
    },
    Highlight {
        title: "Prosedur Cicilan UKT Mahasiswa Fakultas Sains dan Teknologi",
        date: "02 Agustus 2022",
    },
];

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "tagline",
                h1 { "Satu Jiwa" }
                h1 { "Satu Nyawa" }
                h1 { class: "accent", "Informatika!" }
            }
        }
        section {
            class: "home-section",
            h2 { "Informasi Penting" }
            div {
                class: "grid grid-2",
                for highlight in HIGHLIGHTS {
                    div {
                        key: "{highlight.title}",
                        class: "card card-body",
                        h3 { class: "card-title", "{highlight.title}" }
                        p { class: "card-meta", "{highlight.date}" }
                    }
                }
            }
        }
        LatestArticles {}
        LatestPhotos {}
        DepartmentLinks {}
    }
}

#[component]
fn LatestArticles() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let articles = use_api::<Paginated<Article>>();

    let loader = use_resource(move || {
        let client = client.clone();
        async move {
            articles
                .execute(api::articles::list(&client, 1, HOME_ARTICLES))
                .await;
        }
    });

    rsx! {
        section {
            class: "home-section",
            div {
                class: "section-header",
                h2 { "Blog" }
                Link { to: Route::BlogList {}, "See all" }
            }
            if articles.loading() || loader.read().is_none() {
                Spinner {}
            } else if articles.error().is_some() {
                p { class: "field-error", "Failed to load blog posts" }
            } else {
                div {
                    class: "grid grid-2",
                    for article in articles.data().map(|page| page.data).unwrap_or_default() {
                        ArticleCard {
                            key: "{article.id}",
                            on_open: {
                                let id = article.id.clone();
                                move |_| {
                                    nav.push(Route::BlogDetail { id: id.clone() });
                                }
                            },
                            article,
                        }
                    }
                }
            }
        }
    }
}

/// Up to eight photos taken from the first gallery events.
fn photo_strip(events: &[GalleryEvent]) -> Vec<(String, String, String)> {
    events
        .iter()
        .flat_map(|event| {
            event
                .gallery
                .iter()
                .map(|item| (item.id.clone(), event.id.clone(), item.photo_url.clone()))
        })
        .take(HOME_PHOTOS)
        .collect()
}

#[component]
fn LatestPhotos() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let gallery = use_api::<Paginated<GalleryEvent>>();

    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            gallery
                .execute(api::gallery::list(&client, 1, HOME_EVENTS))
                .await;
        }
    });

    let photos = gallery
        .data()
        .map(|page| photo_strip(&page.data))
        .unwrap_or_default();

    rsx! {
        section {
            class: "home-section",
            div {
                class: "section-header",
                h2 { "Galeri" }
                Link { to: Route::Gallery {}, "See all" }
            }
            if gallery.loading() || loader.read().is_none() {
                Spinner {}
            } else if gallery.error().is_some() {
                ErrorMessage {
                    message: "Failed to load gallery items",
                    on_retry: move |_| loader.restart(),
                }
            } else if photos.is_empty() {
                p { class: "muted", "No gallery items found." }
            } else {
                div {
                    class: "grid grid-4",
                    for (item_id, event_id, url) in photos {
                        img {
                            key: "{item_id}",
                            class: "photo",
                            src: "{url}",
                            onclick: move |_| {
                                nav.push(Route::EventPhotos { id: event_id.clone() });
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DepartmentLinks() -> Element {
    let departments = use_departments();
    let list = departments.departments();

    rsx! {
        section {
            class: "home-section",
            h2 { "Departemen" }
            if departments.loading() {
                Spinner {}
            } else if let Some(error) = departments.error() {
                ErrorMessage {
                    message: error,
                    on_retry: move |_| {
                        spawn(async move { departments.refresh().await });
                    },
                }
            } else {
                div {
                    class: "chip-row",
                    for department in list {
                        Link {
                            key: "{department.id}",
                            class: "chip",
                            to: Route::DepartmentDetail { slug: department.slug.clone() },
                            "{department.department}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_photo_strip_flattens_events_in_order() {
        let events: Vec<GalleryEvent> = serde_json::from_value(json!([
            { "id": "e1", "name": "PBAK", "gallery": [
                { "id": "p1", "event_id": "e1", "photo_url": "a.jpg" },
                { "id": "p2", "event_id": "e1", "photo_url": "b.jpg" }
            ]},
            { "id": "e2", "name": "Makrab", "gallery": [
                { "id": "p3", "event_id": "e2", "photo_url": "c.jpg" }
            ]}
        ]))
        .unwrap();
        let strip = photo_strip(&events);
        assert_eq!(strip.len(), 3);
        assert_eq!(strip[2], ("p3".into(), "e2".into(), "c.jpg".into()));
    }
}
