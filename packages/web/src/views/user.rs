use api::User;
use dioxus::prelude::*;
use store::forms::{Field, ProfileUpdate};
use store::FormError;
use ui::components::{ErrorMessage, ImagePicker, Spinner};
use ui::format::format_date;
use ui::{follow_form_redirect, icons, use_api, use_auth, use_client, Icon, RequireSession};

use super::{field_error, form_banner};

/// Account settings of the logged-in user.
#[component]
pub fn UserSettings() -> Element {
    rsx! {
        RequireSession {
            AccountCard {}
        }
    }
}

#[component]
fn AccountCard() -> Element {
    let client = use_client();
    let auth = use_auth();
    let user = use_api::<Option<User>>();
    let mut editing = use_signal(|| false);

    let mut loader = use_resource(move || {
        let client = client.clone();
        async move {
            user.execute(api::users::me(&client)).await;
        }
    });

    if user.loading() || loader.read().is_none() {
        return rsx! {
            Spinner {}
        };
    }
    if let Some(error) = user.error() {
        return rsx! {
            ErrorMessage { message: error, on_retry: move |_| loader.restart() }
        };
    }
    let Some(current) = user.data().flatten() else {
        return rsx! {
            ErrorMessage { message: "You are not logged in", on_retry: move |_| loader.restart() }
        };
    };

    rsx! {
        section {
            class: "container narrow",
            div {
                class: "profile-banner",
                if let Some(avatar) = current.avatar() {
                    img { class: "profile-avatar", src: "{avatar}", alt: "Profile" }
                } else {
                    div {
                        class: "profile-avatar profile-avatar-empty",
                        Icon { icon: icons::FaCamera, width: 28, height: 28 }
                    }
                }
            }
            if editing() {
                EditProfile {
                    user: current.clone(),
                    on_saved: move |_| {
                        editing.set(false);
                        loader.restart();
                        spawn(async move {
                            auth.refresh().await;
                        });
                    },
                    on_cancel: move |_| editing.set(false),
                }
            } else {
                div {
                    class: "profile-details",
                    h1 { "{current.display_name()}" }
                    p { class: "muted", "{current.email}" }
                    if let Some(role) = current.role.as_deref() {
                        span { class: "badge", "{role}" }
                    }
                    if let Some(created) = current.created_at.as_deref() {
                        p { class: "muted", "Member since {format_date(created)}" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| editing.set(true),
                        "Edit Profile"
                    }
                }
            }
        }
    }
}

#[component]
fn EditProfile(user: User, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let client = use_client();
    let mut form = use_signal(|| ProfileUpdate::from_user(&user));
    let mut error = use_signal(|| None::<FormError>);
    let mut saving = use_signal(|| false);
    let user_id = user.id.clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let user_id = user_id.clone();
        let update = form.read().clone();
        error.set(None);
        saving.set(true);
        spawn(async move {
            match update.submit(&client, &user_id).await {
                Ok(_) => on_saved.call(()),
                Err(e) => {
                    follow_form_redirect(&e);
                    error.set(Some(e));
                }
            }
            saving.set(false);
        });
    };

    let preview = form
        .read()
        .profile_picture
        .clone()
        .or_else(|| user.avatar().map(str::to_string));

    rsx! {
        form {
            class: "form",
            onsubmit,
            if let Some(message) = form_banner(&error.read()) {
                div { class: "alert", "{message}" }
            }
            ImagePicker {
                value: preview,
                label: "Change picture",
                on_pick: move |url: String| form.write().profile_picture = Some(url),
            }
            label { r#for: "name", "Name" }
            input {
                id: "name",
                class: "input",
                value: "{form.read().name}",
                oninput: move |evt| form.write().name = evt.value(),
            }
            if let Some(message) = field_error(&error.read(), Field::Name) {
                p { class: "field-error", "{message}" }
            }
            div {
                class: "form-actions",
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}
