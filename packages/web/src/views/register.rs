use dioxus::prelude::*;
use store::forms::{student_email_error, Field, Registration};
use store::FormError;
use ui::components::{PasswordInput, PasswordStrengthMeter};
use ui::{follow_form_redirect, use_client};

use super::{field_error, form_banner};
use crate::Route;

#[component]
pub fn Register() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut form = use_signal(Registration::default);
    let mut error = use_signal(|| None::<FormError>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let registration = form.read().clone();
        error.set(None);
        submitting.set(true);
        spawn(async move {
            match registration.submit(&client).await {
                Ok(_) => {
                    nav.push(Route::Login { from: String::new() });
                }
                Err(e) => {
                    follow_form_redirect(&e);
                    error.set(Some(e));
                }
            }
            submitting.set(false);
        });
    };

    let email_hint = student_email_error(&form.read().email)
        .map(str::to_string)
        .or_else(|| field_error(&error.read(), Field::Email));

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-heading",
                    p { "Hello!" }
                    h2 { "Create an Account" }
                    p { class: "muted", "Sign up to get started" }
                }
                if let Some(message) = form_banner(&error.read()) {
                    div { class: "alert", "{message}" }
                }
                form {
                    class: "form",
                    onsubmit,
                    label { r#for: "name", "Full Name" }
                    input {
                        id: "name",
                        class: "input",
                        autocomplete: "name",
                        placeholder: "Enter your full name",
                        disabled: submitting(),
                        value: "{form.read().name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                    if let Some(message) = field_error(&error.read(), Field::Name) {
                        p { class: "field-error", "{message}" }
                    }
                    label { r#for: "email", "Email address" }
                    input {
                        id: "email",
                        class: "input",
                        r#type: "email",
                        autocomplete: "email",
                        placeholder: "nim@mhs.uinjkt.ac.id",
                        disabled: submitting(),
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                    if let Some(message) = email_hint {
                        p { class: "field-error", "{message}" }
                    }
                    label { "Password" }
                    PasswordInput {
                        value: form.read().password.clone(),
                        placeholder: "Create a password",
                        oninput: move |value: String| form.write().password = value,
                    }
                    PasswordStrengthMeter { password: form.read().password.clone() }
                    if let Some(message) = field_error(&error.read(), Field::Password) {
                        p { class: "field-error", "{message}" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Register" }
                    }
                }
                div {
                    class: "auth-footer",
                    Link {
                        to: Route::Login { from: String::new() },
                        "Already have an account? Sign in"
                    }
                }
            }
        }
    }
}
