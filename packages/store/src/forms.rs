//! # Form validation
//!
//! Client-side checks run before any request is sent. A form that fails
//! validation never reaches the network.
//!
//! | Form | Checks | Sends |
//! |------|--------|-------|
//! | [`Registration`] | name, student email suffix, password length | `POST /auth/register` |
//! | [`LoginForm`] | email and password present | nothing (the auth store logs in) |
//! | [`ForumDraft`] | trimmed title and content | `POST /forums` |
//! | [`CommentDraft`] | trimmed content | `POST /forums/:id/comment` |
//! | [`ProfileUpdate`] | trimmed name | `PATCH /users/:id` |
//! | [`PasswordReset`] | one field per step | forgot-password, verify-otp, reset-password |

use api::models::{
    AuthResponse, Comment, CreateForumRequest, Forum, RegisterRequest, ResetPasswordRequest,
    UpdateUserRequest, User,
};
use api::{auth, forums, users, ApiClient, ApiError, Transport};
use thiserror::Error;

use crate::call::message_for;

pub const STUDENT_EMAIL_SUFFIX: &str = "@mhs.uinjkt.ac.id";
pub const STUDENT_EMAIL_ERROR: &str = "Must using mhs email";
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    Title,
    Content,
    Otp,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{message}")]
    Invalid { field: Field, message: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    fn invalid(field: Field, message: impl Into<String>) -> Self {
        FormError::Invalid {
            field,
            message: message.into(),
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            FormError::Invalid { field, .. } => Some(*field),
            FormError::Api(_) => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            FormError::Invalid { message, .. } => message.clone(),
            FormError::Api(err) => message_for(err),
        }
    }
}

/// Live feedback for the registration email field. Empty input is not an error yet.
pub fn student_email_error(email: &str) -> Option<&'static str> {
    if !email.is_empty() && !email.ends_with(STUDENT_EMAIL_SUFFIX) {
        Some(STUDENT_EMAIL_ERROR)
    } else {
        None
    }
}

fn required(field: Field, value: &str, label: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::invalid(field, format!("{label} is required")))
    } else {
        Ok(value.to_string())
    }
}

fn password(field: Field, value: &str) -> Result<String, FormError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        Err(FormError::invalid(
            field,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ))
    } else {
        Ok(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let name = required(Field::Name, &self.name, "Name")?;
        let email = self.email.trim();
        if !email.ends_with(STUDENT_EMAIL_SUFFIX) {
            return Err(FormError::invalid(Field::Email, STUDENT_EMAIL_ERROR));
        }
        let password = password(Field::Password, &self.password)?;
        Ok(RegisterRequest {
            name,
            email: email.to_string(),
            password,
        })
    }

    pub async fn submit<T: Transport>(
        &self,
        client: &ApiClient<T>,
    ) -> Result<AuthResponse, FormError> {
        let request = self.validate()?;
        Ok(auth::register(client, &request).await?)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        required(Field::Email, &self.email, "Email")?;
        if self.password.is_empty() {
            return Err(FormError::invalid(Field::Password, "Password is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForumDraft {
    pub title: String,
    pub content: String,
    /// Image as a `data:` URL.
    pub thumbnail: Option<String>,
}

impl ForumDraft {
    pub fn validate(&self) -> Result<CreateForumRequest, FormError> {
        Ok(CreateForumRequest {
            title: required(Field::Title, &self.title, "Title")?,
            content: required(Field::Content, &self.content, "Content")?,
            thumbnail: self.thumbnail.clone().filter(|t| !t.is_empty()),
        })
    }

    pub async fn submit<T: Transport>(&self, client: &ApiClient<T>) -> Result<Forum, FormError> {
        let request = self.validate()?;
        Ok(forums::create(client, &request).await?)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentDraft {
    pub content: String,
}

impl CommentDraft {
    pub async fn submit<T: Transport>(
        &self,
        client: &ApiClient<T>,
        forum_id: &str,
    ) -> Result<Comment, FormError> {
        let content = required(Field::Content, &self.content, "Comment")?;
        Ok(forums::comment(client, forum_id, &content).await?)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    /// New picture as a `data:` URL; `None` keeps the current one.
    pub profile_picture: Option<String>,
}

impl ProfileUpdate {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            profile_picture: None,
        }
    }

    pub fn validate(&self) -> Result<UpdateUserRequest, FormError> {
        Ok(UpdateUserRequest {
            name: Some(required(Field::Name, &self.name, "Name")?),
            profile_picture: self.profile_picture.clone(),
        })
    }

    pub async fn submit<T: Transport>(
        &self,
        client: &ApiClient<T>,
        user_id: &str,
    ) -> Result<User, FormError> {
        let changes = self.validate()?;
        Ok(users::update(client, user_id, &changes).await?)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetStep {
    #[default]
    Email,
    Otp,
    Reset,
    Done,
}

/// The forgot-password flow: request an OTP, verify it, set a new password.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordReset {
    pub step: ResetStep,
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

impl PasswordReset {
    /// Send the current step's request and return the step that follows.
    pub async fn submit<T: Transport>(&self, client: &ApiClient<T>) -> Result<ResetStep, FormError> {
        let email = required(Field::Email, &self.email, "Email")?;
        match self.step {
            ResetStep::Email => {
                auth::forgot_password(client, &email).await?;
                Ok(ResetStep::Otp)
            }
            ResetStep::Otp => {
                let otp = required(Field::Otp, &self.otp, "OTP")?;
                auth::verify_otp(client, &email, &otp).await?;
                Ok(ResetStep::Reset)
            }
            ResetStep::Reset => {
                let request = ResetPasswordRequest {
                    email,
                    otp: required(Field::Otp, &self.otp, "OTP")?,
                    new_password: password(Field::Password, &self.new_password)?,
                };
                auth::reset_password(client, &request).await?;
                Ok(ResetStep::Done)
            }
            ResetStep::Done => Ok(ResetStep::Done),
        }
    }

    pub fn advance_to(&mut self, step: ResetStep) {
        self.step = step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Method, MockTransport};
    use serde_json::json;

    fn registration(email: &str) -> Registration {
        Registration {
            name: "Rina".into(),
            email: email.into(),
            password: "password123".into(),
        }
    }

    #[tokio::test]
    async fn test_registration_rejects_non_student_email_offline() {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock.clone());

        for email in ["rina@gmail.com", "rina@uinjkt.ac.id", ""] {
            let err = registration(email).submit(&client).await.unwrap_err();
            assert_eq!(err.field(), Some(Field::Email));
            assert_eq!(err.user_message(), STUDENT_EMAIL_ERROR);
        }
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_registration_submits_valid_form() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/auth/register",
            201,
            json!({ "status": 201, "message": "Registered", "data": { "user": { "id": "u1" } } }),
        );
        let client = ApiClient::new(mock.clone());

        registration(" rina@mhs.uinjkt.ac.id ").submit(&client).await.unwrap();
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({ "name": "Rina", "email": "rina@mhs.uinjkt.ac.id", "password": "password123" }))
        );
    }

    #[tokio::test]
    async fn test_registration_surfaces_server_message() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/auth/register",
            409,
            json!({ "status": 409, "message": "Email already registered" }),
        );
        let client = ApiClient::new(mock);

        let err = registration("rina@mhs.uinjkt.ac.id").submit(&client).await.unwrap_err();
        assert_eq!(err.field(), None);
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn test_live_email_feedback() {
        assert_eq!(student_email_error(""), None);
        assert_eq!(student_email_error("rina@mhs.uinjkt.ac.id"), None);
        assert_eq!(student_email_error("rina@"), Some(STUDENT_EMAIL_ERROR));
    }

    #[test]
    fn test_short_password_rejected() {
        let form = Registration {
            password: "short".into(),
            ..registration("rina@mhs.uinjkt.ac.id")
        };
        assert_eq!(form.validate().unwrap_err().field(), Some(Field::Password));
    }

    #[test]
    fn test_forum_draft_trims_and_requires_fields() {
        let draft = ForumDraft {
            title: "  Study group ".into(),
            content: " Join us ".into(),
            thumbnail: Some(String::new()),
        };
        let request = draft.validate().unwrap();
        assert_eq!(request.title, "Study group");
        assert_eq!(request.thumbnail, None);

        let blank = ForumDraft {
            title: "   ".into(),
            ..draft
        };
        assert_eq!(blank.validate().unwrap_err().field(), Some(Field::Title));
    }

    #[tokio::test]
    async fn test_blank_comment_is_not_sent() {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock.clone());
        let draft = CommentDraft { content: "  \n".into() };
        assert!(draft.submit(&client, "f1").await.is_err());
        assert_eq!(mock.request_count(), 0);
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let form = LoginForm {
            email: "rina@mhs.uinjkt.ac.id".into(),
            password: String::new(),
        };
        assert_eq!(form.validate().unwrap_err().field(), Some(Field::Password));
    }

    #[tokio::test]
    async fn test_password_reset_walks_every_step() {
        let mock = MockTransport::new();
        for path in ["/auth/forgot-password", "/auth/verify-otp", "/auth/reset-password"] {
            mock.respond(Method::Post, path, 200, json!({ "status": 200, "message": "ok", "data": { "message": "ok" } }));
        }
        let client = ApiClient::new(mock.clone());

        let mut flow = PasswordReset {
            email: "rina@mhs.uinjkt.ac.id".into(),
            otp: "123456".into(),
            new_password: "new-password".into(),
            ..PasswordReset::default()
        };
        for expected in [ResetStep::Otp, ResetStep::Reset, ResetStep::Done] {
            let next = flow.submit(&client).await.unwrap();
            assert_eq!(next, expected);
            flow.advance_to(next);
        }
        assert_eq!(mock.request_count(), 3);
        assert_eq!(mock.requests()[2].body.as_ref().unwrap()["newPassword"], "new-password");
    }

    #[tokio::test]
    async fn test_password_reset_stays_on_failed_step() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/auth/verify-otp", 400, json!({ "message": "Invalid OTP" }));
        let client = ApiClient::new(mock);

        let flow = PasswordReset {
            step: ResetStep::Otp,
            email: "rina@mhs.uinjkt.ac.id".into(),
            otp: "000000".into(),
            ..PasswordReset::default()
        };
        let err = flow.submit(&client).await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid OTP");
        assert_eq!(flow.step, ResetStep::Otp);
    }
}
