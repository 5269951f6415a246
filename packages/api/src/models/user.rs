//! # User model
//!
//! [`User`] is the portal's view of an account: `GET /users/me`, `GET /users/:id`,
//! the `user` embedded in articles and the `author` of forum posts and comments
//! all decode into it. Only `id` is required; embedded authors often omit the
//! email and always omit the timestamps.
//!
//! The helper [`User::display_name`] returns the user's name or falls back to
//! their email address.

use serde::{Deserialize, Serialize};

/// User information as sent by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Profile picture URL, ignoring empty strings.
    pub fn avatar(&self) -> Option<&str> {
        self.profile_picture.as_deref().filter(|url| !url.is_empty())
    }
}

/// Body of `PATCH /users/:id`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_profile_and_embedded_author() {
        let me: User = serde_json::from_value(json!({
            "id": "u1",
            "name": "Rina",
            "email": "rina@mhs.uinjkt.ac.id",
            "role": "member",
            "profile_picture": null,
            "createdAt": "2025-05-06T19:52:45.312Z"
        }))
        .unwrap();
        assert_eq!(me.role.as_deref(), Some("member"));
        assert_eq!(me.avatar(), None);
        assert_eq!(me.created_at.as_deref(), Some("2025-05-06T19:52:45.312Z"));

        let author: User = serde_json::from_value(json!({ "id": "u2", "name": "Budi" })).unwrap();
        assert_eq!(author.email, "");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = User {
            id: "u1".into(),
            email: "x@mhs.uinjkt.ac.id".into(),
            ..User::default()
        };
        assert_eq!(user.display_name(), "x@mhs.uinjkt.ac.id");
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let body = serde_json::to_value(UpdateUserRequest {
            name: Some("Rina".into()),
            profile_picture: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "name": "Rina" }));
    }
}
