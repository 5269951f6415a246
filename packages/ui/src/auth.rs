//! Authentication context and hooks for the UI.
//!
//! The session lives in a [`store::AuthStore`]. The context keeps a handle to
//! it next to a signal holding its latest [`AuthSnapshot`], so components
//! re-render when the user logs in or out.

use api::{HttpTransport, User};
use dioxus::prelude::*;
use store::{AuthSnapshot, AuthStore};

use crate::client::use_client;
use crate::navigation::redirect_to;

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: CopyValue<AuthStore<HttpTransport>>,
    state: Signal<AuthSnapshot>,
}

impl AuthContext {
    pub fn snapshot(&self) -> AuthSnapshot {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.read().user().cloned()
    }

    /// True until the first refresh has settled.
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    fn store(&self) -> AuthStore<HttpTransport> {
        self.store.cloned()
    }

    fn sync(mut self) {
        let snapshot = self.store().snapshot();
        self.state.set(snapshot);
    }

    pub async fn refresh(self) -> bool {
        let present = self.store().refresh().await;
        self.sync();
        present
    }

    pub async fn login(self, email: String, password: String) -> bool {
        let logged_in = self.store().login(&email, &password).await;
        self.sync();
        logged_in
    }

    pub async fn logout(self) -> bool {
        let done = self.store().logout().await;
        self.sync();
        done
    }
}

/// Get the current authentication context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Provider component that owns the session store.
/// Wrap your app with this component (inside the client provider).
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_client();
    let store = use_hook(|| CopyValue::new(AuthStore::new(client)));
    let state = use_signal(|| store.read().snapshot());
    let auth = use_context_provider(|| AuthContext { store, state });

    // Load the current user once on mount
    let _ = use_resource(move || async move {
        auth.refresh().await;
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let mut busy = use_signal(|| false);

    let onclick = move |_| async move {
        busy.set(true);
        if auth.logout().await {
            redirect_to(api::navigation::LOGIN_PATH);
        }
        busy.set(false);
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}
