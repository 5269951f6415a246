//! Browser navigation driven by API errors.
//!
//! Service calls return [`ApiError`]s and never move the browser themselves.
//! Pages hand errors to [`follow_error_redirect`], which asks the error where
//! to go and performs a full-page load. Native builds only log the target.

use api::ApiError;
use store::FormError;

/// Path of the page currently shown, without its query string.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let path = window.location().pathname().unwrap_or_default();
            return page_path(&path);
        }
    }
    "/".to_string()
}

/// `location` reduced to its path; an empty path is the root.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn page_path(location: &str) -> String {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Full-page navigation to `url`.
pub fn redirect_to(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("Failed to navigate to {url}: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("Redirect to {url} skipped outside the browser");
    }
}

/// Follow the redirect an error asks for. Returns whether one was issued.
pub fn follow_error_redirect(err: &ApiError) -> bool {
    match err.redirect_target(&current_path()) {
        Some(target) => {
            tracing::info!("Redirecting to {target} after {err}");
            redirect_to(&target);
            true
        }
        None => false,
    }
}

/// [`follow_error_redirect`] for form submissions; validation errors never
/// navigate.
pub fn follow_form_redirect(err: &FormError) -> bool {
    match err {
        FormError::Api(err) => follow_error_redirect(err),
        FormError::Invalid { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::navigation::login_redirect;

    #[test]
    fn test_page_path_drops_query_and_fragment() {
        assert_eq!(page_path("/forum"), "/forum");
        assert_eq!(page_path("/forum?status=DRAFT"), "/forum");
        assert_eq!(page_path("/blog/7#comments"), "/blog/7");
        assert_eq!(page_path(""), "/");
    }

    #[test]
    fn test_login_return_path_has_no_query() {
        assert_eq!(
            login_redirect(&page_path("/forum?x=1")),
            "/auth/login?from=%2Fforum"
        );
    }

    #[test]
    fn test_current_path_outside_browser_is_root() {
        assert_eq!(current_path(), "/");
    }
}
