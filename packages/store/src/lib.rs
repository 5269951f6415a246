//! # Store crate: session state for the HIMTI portal
//!
//! Framework-agnostic state that the UI wraps in signals. Nothing here knows
//! about Dioxus; every type works against any [`api::Transport`], which is how
//! the tests drive it with [`api::MockTransport`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`call`] | [`CallState`]/[`AsyncCall`]: data, loading and error of one async call, newest call wins |
//! | [`auth`] | [`AuthStore`]: the current user, with coalesced refreshes |
//! | [`departments`] | [`DepartmentStore`]: the cached department list |
//! | [`pagination`] | [`PageControls`] for paginated lists |
//! | [`forms`] | Client-side validation and submission of every form |

pub mod auth;
pub mod call;
pub mod departments;
pub mod forms;
pub mod pagination;

pub use auth::{AuthPhase, AuthSnapshot, AuthStore};
pub use call::{message_for, AsyncCall, CallState, Ticket, UNEXPECTED_ERROR};
pub use departments::{DepartmentSnapshot, DepartmentStore, Lifecycle};
pub use forms::{FormError, ResetStep};
pub use pagination::PageControls;
