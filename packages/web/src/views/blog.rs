use api::articles::PAGE_SIZE;
use api::{Article, Paginated};
use dioxus::prelude::*;
use store::message_for;
use ui::components::{ArticleCard, ErrorMessage, Pagination, Spinner};
use ui::format::format_date;
use ui::{follow_error_redirect, icons, use_api, use_client, Icon};

use crate::Route;

#[component]
pub fn BlogList() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let articles = use_api::<Paginated<Article>>();
    let mut page = use_signal(|| 1u32);

    let mut loader = use_resource(move || {
        let client = client.clone();
        let page = page();
        async move {
            articles
                .execute(api::articles::list(&client, page, PAGE_SIZE))
                .await;
        }
    });

    rsx! {
        section {
            class: "container",
            h1 { class: "page-title", "Blog" }
            if let Some(error) = articles.error() {
                ErrorMessage { message: error, on_retry: move |_| loader.restart() }
            } else if let Some(result) = articles.data() {
                if result.data.is_empty() {
                    p { class: "empty-state", "No articles yet." }
                }
                div {
                    class: "grid grid-3",
                    for article in result.data {
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

#[component]
pub fn BlogDetail(id: String) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let article = use_api::<Article>();
    let mut like_error = use_signal(|| None::<String>);
    let mut liking = use_signal(|| false);

    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let loader_client = client.clone();
    let mut loader = use_resource(move || {
        let client = loader_client.clone();
        let id = id_signal();
        async move {
            article.execute(api::articles::get(&client, &id)).await;
        }
    });

    let on_like = move |_| {
        let client = client.clone();
        let id = id_signal();
        let liked = article.data().is_some_and(|a| a.liked());
        liking.set(true);
        like_error.set(None);
        spawn(async move {
            let result = if liked {
                api::articles::unlike(&client, &id).await
            } else {
                api::articles::like(&client, &id).await
            };
            match result {
                Ok(_) => loader.restart(),
                Err(e) => {
                    follow_error_redirect(&e);
                    like_error.set(Some(message_for(&e)));
                }
            }
            liking.set(false);
        });
    };

    if let Some(error) = article.error() {
        return rsx! {
            ErrorMessage { message: error, on_retry: move |_| loader.restart() }
        };
    }
    let Some(current) = article.data() else {
        return rsx! {
            Spinner {}
        };
    };
    let date = format_date(&current.created_at);
    let heart_class = if current.liked() { "like-btn liked" } else { "like-btn" };

    rsx! {
        article {
            class: "container narrow",
            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::BlogList {});
                },
                Icon { icon: icons::FaArrowLeft, width: 12, height: 12 }
                " Back to Blog"
            }
            if let Some(thumbnail) = current.thumbnail.as_deref().filter(|t| !t.is_empty()) {
                img { class: "hero-image", src: "{thumbnail}", alt: "{current.title}" }
            }
            h1 { class: "page-title", "{current.title}" }
            div {
                class: "byline",
                span {
                    Icon { icon: icons::FaUser, width: 12, height: 12 }
                    " {current.author_name()}"
                }
                span {
                    Icon { icon: icons::FaCalendar, width: 12, height: 12 }
                    " {date}"
                }
            }
            div { class: "prose", "{current.content}" }
            div {
                class: "actions",
                button {
                    class: "{heart_class}",
                    disabled: liking(),
                    onclick: on_like,
                    Icon { icon: icons::FaHeart, width: 14, height: 14 }
                    " {current.like_count()}"
                }
                if let Some(message) = like_error() {
                    span { class: "field-error", "{message}" }
                }
            }
        }
    }
}
