use dioxus::prelude::*;
use store::forms::{Field, PasswordReset};
use store::{FormError, ResetStep};
use ui::components::{PasswordInput, PasswordStrengthMeter};
use ui::{follow_form_redirect, use_client};

use super::{field_error, form_banner};
use crate::Route;

fn step_title(step: ResetStep) -> (&'static str, &'static str) {
    match step {
        ResetStep::Email => ("Forgot Password", "Enter your email to receive a one-time code"),
        ResetStep::Otp => ("Verify Code", "Enter the code we sent to your email"),
        ResetStep::Reset | ResetStep::Done => ("Reset Password", "Choose a new password"),
    }
}

fn submit_label(step: ResetStep, busy: bool) -> &'static str {
    match (step, busy) {
        (ResetStep::Email, false) => "Send code",
        (ResetStep::Email, true) => "Sending...",
        (ResetStep::Otp, false) => "Verify code",
        (ResetStep::Otp, true) => "Verifying...",
        (_, false) => "Reset password",
        (_, true) => "Resetting...",
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut flow = use_signal(PasswordReset::default);
    let mut error = use_signal(|| None::<FormError>);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let current = flow.read().clone();
        error.set(None);
        busy.set(true);
        spawn(async move {
            match current.submit(&client).await {
                Ok(ResetStep::Done) => {
                    flow.write().advance_to(ResetStep::Done);
                    nav.push(Route::Login { from: String::new() });
                }
                Ok(next) => flow.write().advance_to(next),
                Err(e) => {
                    follow_form_redirect(&e);
                    error.set(Some(e));
                }
            }
            busy.set(false);
        });
    };

    let step = flow.read().step;
    let (title, subtitle) = step_title(step);

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                div {
                    class: "auth-heading",
                    h2 { "{title}" }
                    p { class: "muted", "{subtitle}" }
                }
                if let Some(message) = form_banner(&error.read()) {
                    div { class: "alert", "{message}" }
                }
                form {
                    class: "form",
                    onsubmit,
                    match step {
                        ResetStep::Email => rsx! {
                            label { r#for: "email", "Email address" }
                            input {
                                id: "email",
                                class: "input",
                                r#type: "email",
                                placeholder: "Enter your email",
                                value: "{flow.read().email}",
                                oninput: move |evt| flow.write().email = evt.value(),
                            }
                        },
                        ResetStep::Otp => rsx! {
                            p { class: "muted", "Code sent to {flow.read().email}" }
                            label { r#for: "otp", "One-time code" }
                            input {
                                id: "otp",
                                class: "input",
                                inputmode: "numeric",
                                placeholder: "Enter the code",
                                value: "{flow.read().otp}",
                                oninput: move |evt| flow.write().otp = evt.value(),
                            }
                        },
                        ResetStep::Reset | ResetStep::Done => rsx! {
                            label { "New password" }
                            PasswordInput {
                                value: flow.read().new_password.clone(),
                                placeholder: "Enter a new password",
                                name: "new-password",
                                oninput: move |value: String| flow.write().new_password = value,
                            }
                            PasswordStrengthMeter { password: flow.read().new_password.clone() }
                        },
                    }
                    for field in [Field::Email, Field::Otp, Field::Password] {
                        if let Some(message) = field_error(&error.read(), field) {
                            p { class: "field-error", "{message}" }
                        }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        "{submit_label(step, busy())}"
                    }
                }
                div {
                    class: "auth-footer",
                    Link { to: Route::Login { from: String::new() }, "Back to sign in" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_the_step() {
        assert_eq!(submit_label(ResetStep::Email, false), "Send code");
        assert_eq!(submit_label(ResetStep::Otp, true), "Verifying...");
        assert_eq!(submit_label(ResetStep::Reset, false), "Reset password");
        assert_eq!(step_title(ResetStep::Otp).0, "Verify Code");
    }
}
