//! Request and response bodies of the `/auth` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::user::User;

/// Message the API sends with a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

/// Answer of `POST /auth/login` and `POST /auth/register`.
///
/// `data` is kept as raw JSON: the portal only needs to know whether the call
/// succeeded, and refetches the user from `/users/me` afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl AuthResponse {
    pub fn is_login_success(&self) -> bool {
        self.status == 201 || self.message == LOGIN_SUCCESS_MESSAGE
    }

    /// The user embedded in `data.user`, when it decodes.
    pub fn user(&self) -> Option<User> {
        let session: AuthSession = serde_json::from_value(self.data.clone()?).ok()?;
        Some(session.user)
    }
}

/// `data` of a login or registration answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSession {
    pub user: User,
}

/// `data` of answers that only carry a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageData {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_success_by_status_or_message() {
        let created: AuthResponse =
            serde_json::from_value(json!({ "status": 201, "message": "Created" })).unwrap();
        assert!(created.is_login_success());

        let ok: AuthResponse = serde_json::from_value(json!({
            "status": 200,
            "message": "Login successful",
            "data": { "user": { "id": "u1", "name": "Rina", "email": "r@mhs.uinjkt.ac.id", "role": "member" } }
        }))
        .unwrap();
        assert!(ok.is_login_success());
        assert_eq!(ok.user().unwrap().id, "u1");

        let other: AuthResponse =
            serde_json::from_value(json!({ "status": 200, "message": "Check your email" })).unwrap();
        assert!(!other.is_login_success());
        assert!(other.user().is_none());
    }

    #[test]
    fn test_reset_request_uses_camel_case_password() {
        let body = serde_json::to_value(ResetPasswordRequest {
            email: "r@mhs.uinjkt.ac.id".into(),
            otp: "123456".into(),
            new_password: "s3cret-pass".into(),
        })
        .unwrap();
        assert_eq!(body["newPassword"], "s3cret-pass");
    }
}
