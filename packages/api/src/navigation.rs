//! Where the browser should go after a failed request.
//!
//! The transport never navigates by itself. Callers ask an [`ApiError`] for its
//! [`redirect_target`](ApiError::redirect_target) and decide whether to follow
//! it (the browser build does, native builds and tests do not).
//!
//! Endpoint matching works on path segments, not substrings: an endpoint is
//! public when its first segment is one of [`PUBLIC_ROOTS`], and exempt from
//! redirects when it is exactly one of [`NO_REDIRECT_ENDPOINTS`].

use crate::client::encode_component;
use crate::error::ApiError;

pub const LOGIN_PATH: &str = "/auth/login";
pub const FORBIDDEN_PATH: &str = "/403";
pub const NOT_FOUND_PATH: &str = "/404";
pub const SERVER_ERROR_PATH: &str = "/500";

/// Resources anyone may read; a 401 from them never forces a login.
pub const PUBLIC_ROOTS: &[&str] = &[
    "departments",
    "forums",
    "articles",
    "blogs",
    "members",
    "divisions",
];

/// Endpoints whose 401 simply means "nobody is logged in".
pub const NO_REDIRECT_ENDPOINTS: &[&str] = &["/users/me"];

fn segments(endpoint: &str) -> Vec<&str> {
    let path = endpoint.split(['?', '#']).next().unwrap_or_default();
    path.split('/').filter(|s| !s.is_empty()).collect()
}

pub fn is_public_endpoint(endpoint: &str) -> bool {
    segments(endpoint)
        .first()
        .is_some_and(|root| PUBLIC_ROOTS.contains(root))
}

pub fn is_no_redirect_endpoint(endpoint: &str) -> bool {
    let path = segments(endpoint);
    NO_REDIRECT_ENDPOINTS
        .iter()
        .any(|exempt| segments(exempt) == path)
}

/// Login URL that brings the user back to `from` afterwards.
pub fn login_redirect(from: &str) -> String {
    format!("{LOGIN_PATH}?from={}", encode_component(from))
}

impl ApiError {
    /// Page the browser should move to after this error, if any.
    ///
    /// - 401: the login page with a `from` return path, unless the endpoint is
    ///   public or exempt, or the user is already on the login page.
    /// - 403, 404, 500: the matching static error page.
    pub fn redirect_target(&self, current_path: &str) -> Option<String> {
        let ApiError::Http {
            status, endpoint, ..
        } = self
        else {
            return None;
        };

        match status {
            401 => {
                if is_public_endpoint(endpoint)
                    || is_no_redirect_endpoint(endpoint)
                    || current_path.contains(LOGIN_PATH)
                {
                    None
                } else {
                    Some(login_redirect(current_path))
                }
            }
            403 => Some(FORBIDDEN_PATH.to_string()),
            404 => Some(NOT_FOUND_PATH.to_string()),
            500 => Some(SERVER_ERROR_PATH.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, endpoint: &str) -> ApiError {
        ApiError::Http {
            status,
            endpoint: endpoint.into(),
            message: None,
        }
    }

    #[test]
    fn test_public_endpoints_match_by_root_segment() {
        assert!(is_public_endpoint("/forums"));
        assert!(is_public_endpoint("/forums/123"));
        assert!(is_public_endpoint("/departments/slug/bph?x=1"));
        assert!(!is_public_endpoint("/users/departments"));
        assert!(!is_public_endpoint("/forums-archive"));
        assert!(!is_public_endpoint("/galleries"));
    }

    #[test]
    fn test_no_redirect_is_exact() {
        assert!(is_no_redirect_endpoint("/users/me"));
        assert!(is_no_redirect_endpoint("/users/me/"));
        assert!(!is_no_redirect_endpoint("/users/me/settings"));
        assert!(!is_no_redirect_endpoint("/users/42"));
    }

    #[test]
    fn test_unauthorized_on_private_endpoint_goes_to_login() {
        let target = http(401, "/users/42").redirect_target("/user");
        assert_eq!(target.as_deref(), Some("/auth/login?from=%2Fuser"));
    }

    #[test]
    fn test_unauthorized_exemptions() {
        assert_eq!(http(401, "/forums/7/like").redirect_target("/forum/7"), None);
        assert_eq!(http(401, "/users/me").redirect_target("/"), None);
        assert_eq!(http(401, "/users/42").redirect_target("/auth/login"), None);
    }

    #[test]
    fn test_static_error_pages() {
        assert_eq!(http(403, "/forums").redirect_target("/").as_deref(), Some("/403"));
        assert_eq!(http(404, "/articles/9").redirect_target("/").as_deref(), Some("/404"));
        assert_eq!(http(500, "/galleries").redirect_target("/").as_deref(), Some("/500"));
        assert_eq!(http(502, "/galleries").redirect_target("/"), None);
        assert_eq!(ApiError::Timeout.redirect_target("/"), None);
    }
}
