//! Records mirrored from the portal API.
//!
//! Field names follow the wire format, which is not consistent across
//! resources: articles and departments use `snake_case`, forums and user
//! timestamps use `camelCase`. List-valued fields are decoded leniently (see
//! [`crate::envelope::coerce_list`]).

mod article;
mod auth;
mod department;
mod forum;
mod gallery;
mod user;

pub use article::{Article, Counts, Like};
pub use auth::{
    AuthResponse, AuthSession, ForgotPasswordRequest, LoginRequest, MessageData, RegisterRequest,
    ResetPasswordRequest, VerifyOtpRequest, LOGIN_SUCCESS_MESSAGE,
};
pub use department::{Department, DepartmentRef, Division, Member};
pub use forum::{
    Comment, CommentRequest, CreateForumRequest, Forum, ForumQuery, ForumStatus, LikeCount,
    UpdateForumRequest, UpdateForumStatusRequest,
};
pub use gallery::{EventGallery, GalleryEvent, GalleryItem};
pub use user::{UpdateUserRequest, User};
