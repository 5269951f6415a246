//! # API crate: typed client for the HIMTI portal REST backend
//!
//! Every page of the portal talks to a remote REST API. This crate owns that
//! conversation: the transport, the response envelope, the error taxonomy and
//! one service module per resource. It has no Dioxus dependency so the same
//! code runs in the browser (WASM), in native tests and on the web host.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Transport`] trait, the reqwest-backed [`HttpTransport`] and the [`ApiClient`] that classifies responses |
//! | [`config`] | [`ApiConfig`]: base URL and request timeout, from the environment or TOML |
//! | [`envelope`] | `{status, message, data}` envelope, paginated variant, lenient list decoding |
//! | [`error`] | [`ApiError`] and the message shown to users |
//! | [`navigation`] | Which errors send the browser to the login or a static error page |
//! | [`guard`] | Cookie-presence route guard for protected paths |
//! | [`mock`] | In-memory [`MockTransport`] used by tests across the workspace |
//! | [`models`] | Records mirrored from the API (users, departments, articles, forums, gallery) |
//!
//! ## Service modules
//!
//! - [`auth`]: login, register, logout, forgot password, OTP verification, password reset
//! - [`users`]: current user, user lookup and profile update
//! - [`departments`]: department list, department by slug, division by id
//! - [`articles`]: paginated blog articles, article detail, like/unlike
//! - [`forums`]: forum posts, status moderation, likes and comments
//! - [`gallery`]: gallery events, event photos, single items

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod mock;
pub mod models;
pub mod navigation;

pub mod articles;
pub mod auth;
pub mod departments;
pub mod forums;
pub mod gallery;
pub mod users;

pub use client::{encode_component, ApiClient, ApiRequest, HttpTransport, Method, RawResponse, Transport};
pub use config::ApiConfig;
pub use envelope::{Envelope, PageMeta, Paginated};
pub use error::{ApiError, ErrorKind};
pub use guard::{GuardDecision, RouteGuard};
pub use mock::MockTransport;
pub use models::{
    Article, Comment, Department, Division, EventGallery, Forum, ForumQuery, ForumStatus, GalleryEvent,
    GalleryItem, Member, User,
};
