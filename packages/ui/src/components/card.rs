use api::{Article, Forum, GalleryEvent};
use dioxus::prelude::*;

use crate::format::{format_date, time_ago};
use crate::icons;
use crate::Icon;

const EXCERPT_CHARS: usize = 140;

/// First `max_chars` characters of `text`, cut at a word boundary.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    let cut = match cut.rfind(char::is_whitespace) {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{}...", cut.trim_end())
}

#[component]
pub fn ArticleCard(article: Article, on_open: EventHandler<()>) -> Element {
    let summary = excerpt(&article.content, EXCERPT_CHARS);
    let date = format_date(&article.created_at);

    rsx! {
        div {
            class: "card card-clickable",
            onclick: move |_| on_open.call(()),
            if let Some(thumbnail) = article.thumbnail.as_deref().filter(|t| !t.is_empty()) {
                img { class: "card-thumb", src: "{thumbnail}", alt: "{article.title}" }
            }
            div {
                class: "card-body",
                h3 { class: "card-title", "{article.title}" }
                p { class: "card-meta", "{article.author_name()} · {date}" }
                p { class: "card-text", "{summary}" }
                span {
                    class: "card-stat",
                    Icon { icon: icons::FaHeart, width: 12, height: 12 }
                    " {article.like_count()}"
                }
            }
        }
    }
}

#[component]
pub fn ForumCard(forum: Forum, on_open: EventHandler<()>) -> Element {
    let summary = excerpt(&forum.content, EXCERPT_CHARS);
    let posted = time_ago(&forum.created_at);
    let status_class = format!("badge badge-{}", forum.status.as_str().to_lowercase());

    rsx! {
        div {
            class: "card card-clickable",
            onclick: move |_| on_open.call(()),
            div {
                class: "card-body",
                div {
                    class: "card-header-row",
                    h3 { class: "card-title", "{forum.title}" }
                    span { class: "{status_class}", "{forum.status.label()}" }
                }
                p { class: "card-meta", "{forum.author_name()} · {posted}" }
                p { class: "card-text", "{summary}" }
                div {
                    class: "card-stats",
                    span {
                        class: "card-stat",
                        Icon { icon: icons::FaHeart, width: 12, height: 12 }
                        " {forum.like_count()}"
                    }
                    span {
                        class: "card-stat",
                        Icon { icon: icons::FaComment, width: 12, height: 12 }
                        " {forum.comment_count()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn EventCard(event: GalleryEvent, on_open: EventHandler<()>) -> Element {
    let count = event.photo_count();
    let noun = if count == 1 { "photo" } else { "photos" };

    rsx! {
        div {
            class: "card card-clickable",
            onclick: move |_| on_open.call(()),
            if let Some(cover) = event.cover() {
                img { class: "card-thumb", src: "{cover}", alt: "{event.name}" }
            } else {
                div {
                    class: "card-thumb card-thumb-empty",
                    Icon { icon: icons::FaImage, width: 32, height: 32 }
                }
            }
            div {
                class: "card-body",
                h3 { class: "card-title", "{event.name}" }
                p { class: "card-meta", "{count} {noun}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_keeps_short_text() {
        assert_eq!(excerpt("  Rapat kerja  ", 140), "Rapat kerja");
    }

    #[test]
    fn test_excerpt_cuts_at_word_boundary() {
        assert_eq!(excerpt("Open recruitment is now open", 20), "Open recruitment is...");
        assert_eq!(excerpt("abcdefghij", 4), "abcd...");
    }
}
