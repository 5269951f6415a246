use dioxus::prelude::*;
use store::forms::{Field, LoginForm};
use store::FormError;
use ui::components::PasswordInput;
use ui::{use_auth, use_departments};

use super::{field_error, form_banner};
use crate::{go_to, Route};

/// Where to go after logging in: `from` if it is a local path, else home.
pub(crate) fn return_path(from: &str) -> String {
    let from = from.trim();
    let local = from.starts_with('/') && !from.starts_with("//");
    if local && !from.starts_with(api::navigation::LOGIN_PATH) {
        from.to_string()
    } else {
        "/".to_string()
    }
}

#[component]
pub fn Login(from: String) -> Element {
    let auth = use_auth();
    let departments = use_departments();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| None::<FormError>);
    let mut submitting = use_signal(|| false);
    let target = use_signal(|| return_path(&from));

    // If already logged in, leave the page
    use_effect(move || {
        if auth.snapshot().is_authenticated() && !*submitting.peek() {
            go_to(nav, &target.peek());
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form.read().clone();
        if let Err(e) = current.validate() {
            error.set(Some(e));
            return;
        }
        error.set(None);
        submitting.set(true);
        spawn(async move {
            if auth.login(current.email.trim().to_string(), current.password).await {
                departments.refresh().await;
                go_to(nav, &target.peek());
            }
            submitting.set(false);
        });
    };

    let banner = form_banner(&error.read()).or_else(|| auth.error());

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-heading",
                    p { "Hi there!" }
                    h2 { "Welcome Back" }
                    p { class: "muted", "Sign in to your account" }
                }
                if let Some(message) = banner {
                    div { class: "alert", "{message}" }
                }
                form {
                    class: "form",
                    onsubmit,
                    label {
                        r#for: "email",
                        "Email address"
                    }
                    input {
                        id: "email",
                        class: "input",
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: "Enter your email",
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    if let Some(message) = field_error(&error.read(), Field::Email) {
                        p { class: "field-error", "{message}" }
                    }
                    label { "Password" }
                    PasswordInput {
                        value: form.read().password.clone(),
                        placeholder: "Enter your password",
                        oninput: move |value: String| form.write().password = value,
                    }
                    if let Some(message) = field_error(&error.read(), Field::Password) {
                        p { class: "field-error", "{message}" }
                    }
                    div {
                        class: "form-aside",
                        Link { to: Route::ForgotPassword {}, "Forgot your password?" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
                div {
                    class: "auth-footer",
                    Link { to: Route::Register {}, "Don't have an account? Register now" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_path_keeps_local_paths() {
        assert_eq!(return_path("/forum/create"), "/forum/create");
        assert_eq!(return_path("/user?tab=profile"), "/user?tab=profile");
    }

    #[test]
    fn test_return_path_rejects_everything_else() {
        assert_eq!(return_path(""), "/");
        assert_eq!(return_path("https://evil.example"), "/");
        assert_eq!(return_path("//evil.example"), "/");
        assert_eq!(return_path("/auth/login?from=%2F"), "/");
    }
}
