//! Forum posts and comments.

use serde::{Deserialize, Serialize};

use super::article::Counts;
use super::user::User;
use crate::envelope::lenient_vec;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ForumStatus {
    #[default]
    Draft,
    Published,
    Rejected,
}

impl ForumStatus {
    pub const ALL: [ForumStatus; 3] = [
        ForumStatus::Draft,
        ForumStatus::Published,
        ForumStatus::Rejected,
    ];

    /// Wire value, also used as the `status` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ForumStatus::Draft => "DRAFT",
            ForumStatus::Published => "PUBLISHED",
            ForumStatus::Rejected => "REJECTED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForumStatus::Draft => "Draft",
            ForumStatus::Published => "Published",
            ForumStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub forum_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub status: ForumStatus,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(rename = "_count", default)]
    pub counts: Option<Counts>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(rename = "is_liked", default)]
    pub is_liked: Option<bool>,
}

impl Forum {
    pub fn like_count(&self) -> u64 {
        self.counts
            .as_ref()
            .map(|c| c.likes)
            .or(self.likes)
            .unwrap_or(0)
    }

    pub fn comment_count(&self) -> u64 {
        self.counts
            .as_ref()
            .and_then(|c| c.comments)
            .unwrap_or(self.comments.len() as u64)
    }

    pub fn liked(&self) -> bool {
        self.is_liked.unwrap_or(false)
    }

    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .map(User::display_name)
            .unwrap_or("Anonymous")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateForumRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateForumRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateForumStatusRequest {
    pub status: ForumStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentRequest {
    pub comment: String,
}

/// `data` of `POST /forums/:id/like`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LikeCount {
    #[serde(default)]
    pub likes: u64,
}

/// Filters of `GET /forums`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForumQuery {
    pub status: Option<ForumStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ForumQuery {
    pub fn with_status(mut self, status: ForumStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_shape() {
        let forum: Forum = serde_json::from_value(json!({
            "id": "f1",
            "title": "Rust study group",
            "content": "Who's in?",
            "status": "PUBLISHED",
            "authorId": "u1",
            "author": { "id": "u1", "name": "Rina", "email": "r@mhs.uinjkt.ac.id" },
            "likes": 3,
            "comments": [
                { "id": "c1", "content": "Me!", "authorId": "u2", "forumId": "f1",
                  "createdAt": "2025-05-06T19:52:45.312Z", "updatedAt": "2025-05-06T19:52:45.312Z" }
            ],
            "createdAt": "2025-05-06T19:52:45.312Z",
            "updatedAt": "2025-05-06T19:52:45.312Z"
        }))
        .unwrap();
        assert_eq!(forum.status, ForumStatus::Published);
        assert_eq!(forum.like_count(), 3);
        assert_eq!(forum.comment_count(), 1);
        assert_eq!(forum.comments[0].forum_id, "f1");
        assert_eq!(forum.author_name(), "Rina");
    }

    #[test]
    fn test_list_shape_prefers_count_block() {
        let forum: Forum = serde_json::from_value(json!({
            "id": "f1",
            "status": "DRAFT",
            "comments": null,
            "_count": { "likes": 9, "comments": 4 },
            "is_liked": true
        }))
        .unwrap();
        assert_eq!(forum.like_count(), 9);
        assert_eq!(forum.comment_count(), 4);
        assert!(forum.liked());
        assert_eq!(forum.author_name(), "Anonymous");
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_value(UpdateForumStatusRequest { status: ForumStatus::Rejected }).unwrap(),
            json!({ "status": "REJECTED" })
        );
        assert_eq!(ForumStatus::parse("published"), Some(ForumStatus::Published));
        assert_eq!(ForumStatus::parse("archived"), None);
    }

    #[test]
    fn test_create_request_omits_missing_thumbnail() {
        let body = serde_json::to_value(CreateForumRequest {
            title: "t".into(),
            content: "c".into(),
            thumbnail: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "title": "t", "content": "c" }));
    }
}
