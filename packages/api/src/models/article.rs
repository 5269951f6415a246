//! Blog articles.

use serde::{Deserialize, Serialize};

use super::user::User;
use crate::envelope::lenient_vec;

/// `_count` block the API attaches to articles and forum posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Counts {
    #[serde(default)]
    pub likes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Like {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub article_id: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Author name as denormalized by the API.
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: String,
    #[serde(rename = "_count", default)]
    pub counts: Counts,
    /// Individual likes; only the detail endpoint sends them.
    #[serde(default, deserialize_with = "lenient_vec")]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub is_liked: Option<bool>,
}

impl Article {
    pub fn like_count(&self) -> u64 {
        if self.likes.is_empty() {
            self.counts.likes
        } else {
            self.likes.len() as u64
        }
    }

    pub fn liked(&self) -> bool {
        self.is_liked.unwrap_or(false)
    }

    /// Name shown in bylines, preferring the embedded user record.
    pub fn author_name(&self) -> &str {
        match &self.user {
            Some(user) if !user.display_name().is_empty() => user.display_name(),
            _ => &self.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_entry_uses_count_block() {
        let article: Article = serde_json::from_value(json!({
            "id": "a1",
            "title": "Welcome",
            "content": "Hello",
            "thumbnail": "https://cdn.example/a1.png",
            "author": "Admin",
            "author_id": "u1",
            "created_at": "2025-05-06T19:52:45.312Z",
            "user": { "id": "u1", "name": "Rina", "email": "r@mhs.uinjkt.ac.id", "profile_picture": null },
            "_count": { "likes": 4, "comments": 2 }
        }))
        .unwrap();
        assert_eq!(article.like_count(), 4);
        assert_eq!(article.counts.comments, Some(2));
        assert_eq!(article.author_name(), "Rina");
        assert!(!article.liked());
    }

    #[test]
    fn test_detail_counts_individual_likes() {
        let article: Article = serde_json::from_value(json!({
            "id": "a1",
            "author": "Admin",
            "likes": [{ "id": "l1" }, { "id": "l2" }],
            "is_liked": true
        }))
        .unwrap();
        assert_eq!(article.like_count(), 2);
        assert_eq!(article.author_name(), "Admin");
        assert!(article.liked());
    }
}
