//! Settings of the web host.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `portal.toml` in the working directory (optional)
//! 3. `PORTAL_*` environment variables, `__` between nested keys and `,`
//!    between list items, e.g. `PORTAL_GUARD__PROTECTED_PATHS=/user,/forum/create`

use api::RouteGuard;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    /// `host:port` to bind. Falls back to the address `dx serve` hands us.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub guard: RouteGuard,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(
                File::with_name("portal.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("PORTAL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("guard.protected_paths")
                    .with_list_parse_key("guard.session_cookies"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::{remove_var, set_var};

    #[test]
    fn test_settings() {
        set_var("PORTAL_ADDRESS", "0.0.0.0:9000");
        set_var("PORTAL_GUARD__PROTECTED_PATHS", "/user,/forum/create,/admin");
        let settings = Settings::new().unwrap_or_default();
        println!("Settings = {:?}", settings);
        assert_eq!(settings.address.as_deref(), Some("0.0.0.0:9000"));
        assert!(settings.guard.requires_session("/admin/users"));
        assert_eq!(settings.guard.session_cookies, vec!["jwt", "auth_token"]);
        remove_var("PORTAL_ADDRESS");
        remove_var("PORTAL_GUARD__PROTECTED_PATHS");
    }
}
