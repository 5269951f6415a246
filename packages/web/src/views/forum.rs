use api::forums::PAGE_SIZE;
use api::{Forum, ForumQuery, ForumStatus, Paginated};
use dioxus::prelude::*;
use store::forms::{CommentDraft, Field, ForumDraft};
use store::{message_for, FormError};
use ui::components::{ErrorMessage, ForumCard, ImagePicker, Pagination, Spinner};
use ui::format::{format_date, time_ago};
use ui::{
    follow_error_redirect, follow_form_redirect, icons, use_api, use_client, Icon, RequireSession,
};

use super::{field_error, form_banner};
use crate::Route;

/// Choices of the status filter, as `(select value, label)`.
const STATUS_FILTERS: &[(&str, &str)] = &[
    ("all", "All Posts"),
    ("PUBLISHED", "Published"),
    ("DRAFT", "Draft"),
];

/// Status to filter by for a select value; "all" means no filter.
fn status_filter(value: &str) -> Option<ForumStatus> {
    if value == "all" {
        None
    } else {
        ForumStatus::parse(value)
    }
}

fn forum_query(status: Option<ForumStatus>, page: u32) -> ForumQuery {
    let query = ForumQuery::default().with_page(page, PAGE_SIZE);
    match status {
        Some(status) => query.with_status(status),
        None => query,
    }
}

#[component]
pub fn ForumList() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let forums = use_api::<Paginated<Forum>>();
    let mut page = use_signal(|| 1u32);
    let mut status = use_signal(|| None::<ForumStatus>);

    let mut loader = use_resource(move || {
        let client = client.clone();
        let query = forum_query(status(), page());
        async move {
            forums.execute(api::forums::list(&client, &query)).await;
        }
    });

    let selected = status().map(|s| s.as_str()).unwrap_or("all");

    rsx! {
        section {
            class: "container",
            div {
                class: "section-header",
                h1 { class: "page-title", "Forum" }
                div {
                    class: "toolbar",
                    select {
                        class: "select",
                        value: "{selected}",
                        onchange: move |evt| {
                            status.set(status_filter(&evt.value()));
                            page.set(1);
                        },
                        for (value, label) in STATUS_FILTERS.iter().copied() {
                            option { value: "{value}", selected: value == selected, "{label}" }
                        }
                    }
                    Link { class: "btn btn-primary", to: Route::ForumCreate {}, "Create Post" }
                }
            }
            if let Some(error) = forums.error() {
                ErrorMessage { message: error, on_retry: move |_| loader.restart() }
            } else if let Some(result) = forums.data() {
                if result.data.is_empty() {
                    div {
                        class: "empty-state",
                        p { "No forum posts found." }
                        Link { class: "btn btn-primary", to: Route::ForumCreate {}, "Create Your First Post" }
                    }
                } else {
                    div {
                        class: "grid grid-3",
                        for forum in result.data {
                            ForumCard {
                                key: "{forum.id}",
                                on_open: {
                                    let id = forum.id.clone();
                                    move |_| {
                                        nav.push(Route::ForumDetail { id: id.clone() });
                                    }
                                },
                                forum,
                            }
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
pub fn ForumDetail(id: String) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let forum = use_api::<Forum>();
    let mut draft = use_signal(CommentDraft::default);
    let mut comment_error = use_signal(|| None::<FormError>);
    let mut like_error = use_signal(|| None::<String>);
    let mut commenting = use_signal(|| false);

    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let loader_client = client.clone();
    let mut loader = use_resource(move || {
        let client = loader_client.clone();
        let id = id_signal();
        async move {
            forum.execute(api::forums::get(&client, &id)).await;
        }
    });

    let like_client = client.clone();
    let on_like = move |_| {
        let client = like_client.clone();
        let id = id_signal();
        like_error.set(None);
        spawn(async move {
            match api::forums::like(&client, &id).await {
                Ok(_) => loader.restart(),
                Err(e) => {
                    follow_error_redirect(&e);
                    like_error.set(Some(message_for(&e)));
                }
            }
        });
    };

    let on_comment = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let id = id_signal();
        let current = draft.read().clone();
        commenting.set(true);
        comment_error.set(None);
        spawn(async move {
            match current.submit(&client, &id).await {
                Ok(_) => {
                    draft.set(CommentDraft::default());
                    loader.restart();
                }
                Err(e) => {
                    follow_form_redirect(&e);
                    comment_error.set(Some(e));
                }
            }
            commenting.set(false);
        });
    };

    if let Some(error) = forum.error() {
        return rsx! {
            ErrorMessage { message: error, on_retry: move |_| loader.restart() }
        };
    }
    let Some(current) = forum.data() else {
        return rsx! {
            Spinner {}
        };
    };
    let posted = format_date(&current.created_at);
    let heart_class = if current.liked() { "like-btn liked" } else { "like-btn" };
    let blank = draft.read().content.trim().is_empty();
    let comment_message =
        field_error(&comment_error(), Field::Content).or_else(|| form_banner(&comment_error()));

    rsx! {
        div {
            class: "container narrow",
            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::ForumList {});
                },
                Icon { icon: icons::FaArrowLeft, width: 12, height: 12 }
                " Back to Forum"
            }
            article {
                class: "post",
                if let Some(thumbnail) = current.thumbnail.as_deref().filter(|t| !t.is_empty()) {
                    img { class: "hero-image", src: "{thumbnail}", alt: "{current.title}" }
                }
                h1 { class: "page-title", "{current.title}" }
                div {
                    class: "byline",
                    if let Some(avatar) = current.author.as_ref().and_then(|a| a.avatar()) {
                        img { class: "avatar-sm", src: "{avatar}", alt: "{current.author_name()}" }
                    }
                    span { "{current.author_name()}" }
                    span {
                        Icon { icon: icons::FaCalendar, width: 12, height: 12 }
                        " {posted}"
                    }
                }
                div { class: "prose", "{current.content}" }
                div {
                    class: "actions",
                    button {
                        class: "{heart_class}",
                        onclick: on_like,
                        Icon { icon: icons::FaHeart, width: 14, height: 14 }
                        " {current.like_count()}"
                    }
                    span {
                        class: "card-stat",
                        Icon { icon: icons::FaComment, width: 14, height: 14 }
                        " {current.comment_count()}"
                    }
                    if let Some(message) = like_error() {
                        span { class: "field-error", "{message}" }
                    }
                }
            }
            section {
                class: "comments",
                h2 { "Comments" }
                form {
                    class: "form",
                    onsubmit: on_comment,
                    textarea {
                        class: "input",
                        rows: 3,
                        placeholder: "Write a comment...",
                        value: "{draft.read().content}",
                        oninput: move |evt| draft.write().content = evt.value(),
                    }
                    if let Some(message) = comment_message {
                        p { class: "field-error", "{message}" }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: commenting() || blank,
                        if commenting() { "Posting..." } else { "Post Comment" }
                    }
                }
                if current.comments.is_empty() {
                    p { class: "empty-state", "No comments yet." }
                }
                for comment in current.comments {
                    div {
                        key: "{comment.id}",
                        class: "comment",
                        div {
                            class: "comment-head",
                            if let Some(avatar) = comment.author.as_ref().and_then(|a| a.avatar()) {
                                img { class: "avatar-sm", src: "{avatar}", alt: "" }
                            }
                            strong {
                                {comment.author.as_ref().map(|a| a.display_name()).unwrap_or("Anonymous")}
                            }
                            span { class: "card-meta", {time_ago(&comment.created_at)} }
                        }
                        p { "{comment.content}" }
                    }
                }
            }
        }
    }
}

/// New forum post. Only reachable with a session.
#[component]
pub fn ForumCreate() -> Element {
    rsx! {
        RequireSession {
            ForumEditor {}
        }
    }
}

#[component]
fn ForumEditor() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut form = use_signal(ForumDraft::default);
    let mut error = use_signal(|| None::<FormError>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let draft = form.read().clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match draft.submit(&client).await {
                Ok(forum) => {
                    tracing::info!("Created forum post {}", forum.id);
                    nav.push(Route::ForumList {});
                }
                Err(e) => {
                    follow_form_redirect(&e);
                    error.set(Some(e));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "container narrow",
            button {
                class: "back-link",
                onclick: move |_| {
                    nav.push(Route::ForumList {});
                },
                Icon { icon: icons::FaArrowLeft, width: 12, height: 12 }
                " Back to Forum"
            }
            h1 { class: "page-title", "Create New Post" }
            if let Some(message) = form_banner(&error()) {
                div { class: "alert", "{message}" }
            }
            form {
                class: "form",
                onsubmit: on_submit,
                label { r#for: "title", "Title" }
                input {
                    class: "input",
                    id: "title",
                    r#type: "text",
                    placeholder: "Enter post title",
                    value: "{form.read().title}",
                    oninput: move |evt| form.write().title = evt.value(),
                }
                if let Some(message) = field_error(&error(), Field::Title) {
                    p { class: "field-error", "{message}" }
                }
                label { r#for: "content", "Content" }
                textarea {
                    class: "input",
                    id: "content",
                    rows: 8,
                    placeholder: "Write your post content...",
                    value: "{form.read().content}",
                    oninput: move |evt| form.write().content = evt.value(),
                }
                if let Some(message) = field_error(&error(), Field::Content) {
                    p { class: "field-error", "{message}" }
                }
                ImagePicker {
                    value: form.read().thumbnail.clone(),
                    on_pick: move |url: String| form.write().thumbnail = Some(url),
                    label: "Thumbnail",
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| {
                            nav.push(Route::ForumList {});
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating..." } else { "Create Post" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter() {
        assert_eq!(status_filter("all"), None);
        assert_eq!(status_filter("PUBLISHED"), Some(ForumStatus::Published));
        assert_eq!(status_filter("DRAFT"), Some(ForumStatus::Draft));
    }

    #[test]
    fn test_forum_query_pages_with_optional_status() {
        let query = forum_query(None, 3);
        assert_eq!(query.status, None);
        assert_eq!(query.page, Some(3));
        assert_eq!(query.limit, Some(PAGE_SIZE));
        assert_eq!(
            forum_query(Some(ForumStatus::Published), 1).status,
            Some(ForumStatus::Published)
        );
    }
}
