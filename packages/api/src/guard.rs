//! Cookie-presence gate for protected pages.
//!
//! The API sets an HTTP-only session cookie on login. The guard only checks
//! that one of the known session cookies is present; it does not look at its
//! value, signature or expiry. The API authorizes every call on its own.

use cookie::Cookie;
use serde::{Deserialize, Serialize};

use crate::navigation::login_redirect;

/// Path prefixes that need a session.
pub const DEFAULT_PROTECTED_PATHS: &[&str] = &["/user", "/forum/create"];

/// Cookie names the API uses for its session.
pub const DEFAULT_SESSION_COOKIES: &[&str] = &["jwt", "auth_token"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send the visitor to this URL instead.
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGuard {
    #[serde(default = "default_protected_paths")]
    pub protected_paths: Vec<String>,
    #[serde(default = "default_session_cookies")]
    pub session_cookies: Vec<String>,
}

fn default_protected_paths() -> Vec<String> {
    DEFAULT_PROTECTED_PATHS.iter().map(|p| p.to_string()).collect()
}

fn default_session_cookies() -> Vec<String> {
    DEFAULT_SESSION_COOKIES.iter().map(|c| c.to_string()).collect()
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self {
            protected_paths: default_protected_paths(),
            session_cookies: default_session_cookies(),
        }
    }
}

impl RouteGuard {
    pub fn new(protected_paths: Vec<String>, session_cookies: Vec<String>) -> Self {
        Self {
            protected_paths,
            session_cookies,
        }
    }

    pub fn requires_session(&self, path: &str) -> bool {
        self.protected_paths
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Whether a `Cookie` header carries one of the session cookies.
    pub fn has_session(&self, cookie_header: Option<&str>) -> bool {
        let Some(header) = cookie_header else {
            return false;
        };
        Cookie::split_parse(header)
            .filter_map(Result::ok)
            .any(|cookie| self.session_cookies.iter().any(|name| name == cookie.name()))
    }

    pub fn check(&self, path: &str, cookie_header: Option<&str>) -> GuardDecision {
        if self.requires_session(path) && !self.has_session(cookie_header) {
            GuardDecision::Redirect(login_redirect(path))
        } else {
            GuardDecision::Allow
        }
    }
}
