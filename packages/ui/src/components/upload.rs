//! Image picker that turns the chosen file into a `data:` URL, which is how
//! the API accepts thumbnails and profile pictures.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::prelude::*;

/// Largest image accepted, in bytes.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn data_url(file_name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for(file_name), STANDARD.encode(bytes))
}

/// File input with a preview of the current image.
#[component]
pub fn ImagePicker(
    /// Current image (URL or data URL).
    value: Option<String>,
    on_pick: EventHandler<String>,
    #[props(default = "Choose image".to_string())] label: String,
) -> Element {
    let mut error = use_signal(|| None::<String>);

    let onchange = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) if bytes.len() > MAX_IMAGE_BYTES => {
                error.set(Some(format!("{name} is larger than 5 MB")));
            }
            Ok(bytes) => {
                error.set(None);
                on_pick.call(data_url(&name, &bytes));
            }
            Err(e) => {
                tracing::error!("Failed to read {name}: {e}");
                error.set(Some(format!("Could not read {name}")));
            }
        }
    };

    rsx! {
        div {
            class: "image-picker",
            if let Some(src) = value.as_deref().filter(|v| !v.is_empty()) {
                img { class: "image-preview", src: "{src}", alt: "Preview" }
            }
            label {
                class: "btn btn-outline",
                "{label}"
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden",
                    onchange: onchange,
                }
            }
            if let Some(message) = error() {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for("photo.JPG"), "image/jpeg");
        assert_eq!(mime_for("logo.png"), "image/png");
        assert_eq!(mime_for("README"), "application/octet-stream");
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("a.png", b"hi"), "data:image/png;base64,aGk=");
    }
}
