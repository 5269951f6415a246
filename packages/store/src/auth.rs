//! # Auth store
//!
//! One in-memory record of "who is logged in" per browser session.
//!
//! ```text
//! Uninitialized ──refresh──▶ Loading ──▶ Authenticated(user)
//!                                    └─▶ Anonymous
//! ```
//!
//! Overlapping [`refresh`](AuthStore::refresh) calls share a single
//! `GET /users/me`; every caller resolves with the same outcome. A failed
//! refresh is logged and treated as [`AuthPhase::Anonymous`], so guests can
//! browse. A refresh while already authenticated keeps the current user
//! visible until the answer arrives.
//!
//! Cloning an [`AuthStore`] clones the handle; all clones share the state.

use std::cell::RefCell;
use std::rc::Rc;

use api::{auth, users, ApiClient, Transport, User};
use futures::future::{FutureExt, LocalBoxFuture, Shared};

use crate::call::message_for;

pub const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthPhase {
    #[default]
    Uninitialized,
    Loading,
    Authenticated(User),
    Anonymous,
}

/// Read-only copy of the store, cheap enough to put in a UI signal.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSnapshot {
    pub phase: AuthPhase,
    pub error: Option<String>,
    /// True until the first refresh has settled.
    pub loading: bool,
}

impl Default for AuthSnapshot {
    /// A session nobody has asked about yet: still loading.
    fn default() -> Self {
        Self {
            phase: AuthPhase::Uninitialized,
            error: None,
            loading: true,
        }
    }
}

impl AuthSnapshot {
    pub fn user(&self) -> Option<&User> {
        match &self.phase {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    /// Settled without a user.
    pub fn is_anonymous(&self) -> bool {
        self.phase == AuthPhase::Anonymous
    }
}

type Pending = Shared<LocalBoxFuture<'static, bool>>;

#[derive(Default)]
struct Inner {
    phase: AuthPhase,
    error: Option<String>,
    settled_once: bool,
    pending: Option<Pending>,
}

pub struct AuthStore<T: Transport> {
    client: ApiClient<T>,
    inner: Rc<RefCell<Inner>>,
}

impl<T: Transport + Clone> Clone for AuthStore<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport + Clone + 'static> AuthStore<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            client,
            inner: Rc::new(RefCell::new(Inner::default())),
        }
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        let inner = self.inner.borrow();
        AuthSnapshot {
            phase: inner.phase.clone(),
            error: inner.error.clone(),
            loading: !inner.settled_once,
        }
    }

    pub fn user(&self) -> Option<User> {
        self.snapshot().user().cloned()
    }

    pub fn refresh_in_flight(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Re-read the current user. Resolves to whether one is logged in.
    pub async fn refresh(&self) -> bool {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            match &inner.pending {
                Some(pending) => pending.clone(),
                None => {
                    if !matches!(inner.phase, AuthPhase::Authenticated(_)) {
                        inner.phase = AuthPhase::Loading;
                    }
                    let pending = self.fetch_user().boxed_local().shared();
                    inner.pending = Some(pending.clone());
                    pending
                }
            }
        };
        pending.await
    }

    fn fetch_user(&self) -> impl std::future::Future<Output = bool> + 'static {
        let client = self.client.clone();
        let state = Rc::clone(&self.inner);
        async move {
            let outcome = users::me(&client).await;
            let mut inner = state.borrow_mut();
            inner.pending = None;
            inner.settled_once = true;
            match outcome {
                Ok(Some(user)) => {
                    tracing::debug!("Session belongs to {}", user.id);
                    inner.phase = AuthPhase::Authenticated(user);
                    true
                }
                Ok(None) => {
                    inner.phase = AuthPhase::Anonymous;
                    false
                }
                Err(e) => {
                    tracing::error!("Failed to fetch user: {e}");
                    inner.phase = AuthPhase::Anonymous;
                    false
                }
            }
        }
    }

    /// Refresh unless the store already knows the answer.
    pub async fn ensure(&self) -> bool {
        let known = match &self.inner.borrow().phase {
            AuthPhase::Authenticated(_) => Some(true),
            AuthPhase::Anonymous => Some(false),
            AuthPhase::Uninitialized | AuthPhase::Loading => None,
        };
        match known {
            Some(answer) => answer,
            None => self.refresh().await,
        }
    }

    /// Log in and load the new session's user.
    ///
    /// Failures land in the snapshot's `error`; the return value only says
    /// whether a user is now present.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.inner.borrow_mut().error = None;
        match auth::login(&self.client, email, password).await {
            Ok(response) if response.is_login_success() => self.refresh().await,
            Ok(response) => {
                tracing::warn!("Login answered without success: {}", response.message);
                self.inner.borrow_mut().error = Some(LOGIN_FAILED.to_string());
                false
            }
            Err(e) => {
                self.inner.borrow_mut().error = Some(message_for(&e));
                false
            }
        }
    }

    /// End the session. The caller navigates to the login page on `true`.
    pub async fn logout(&self) -> bool {
        match auth::logout(&self.client).await {
            Ok(()) => {
                let mut inner = self.inner.borrow_mut();
                inner.phase = AuthPhase::Anonymous;
                inner.error = None;
                true
            }
            Err(e) => {
                tracing::error!("Logout error: {e}");
                false
            }
        }
    }

    /// Forget the cached user; the next [`ensure`](Self::ensure) refetches.
    ///
    /// A refresh already in flight still settles normally.
    pub fn invalidate(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.pending.is_none() {
            inner.phase = AuthPhase::Uninitialized;
        }
    }
}
