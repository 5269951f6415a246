//! Client-side counterpart of the host's cookie guard.
//!
//! The session cookie is HTTP-only, so the browser build cannot see it. It
//! waits for the auth store instead and sends guests to the login page.

use api::navigation::login_redirect;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::Spinner;
use crate::navigation::{current_path, redirect_to};

#[component]
pub fn RequireSession(children: Element) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if auth.snapshot().is_anonymous() {
            redirect_to(&login_redirect(&current_path()));
        }
    });

    let snapshot = auth.snapshot();
    if snapshot.is_authenticated() {
        rsx! {
            {children}
        }
    } else {
        rsx! {
            Spinner { label: "Checking your session..." }
        }
    }
}
