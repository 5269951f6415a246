//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;
pub mod format;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub const PORTAL_CSS: Asset = asset!("/assets/portal.css");

mod client;
pub use client::{make_client, use_client, ClientProvider, PortalClient};

mod use_api;
pub use use_api::{use_api, UseApi};

pub mod navigation;
pub use navigation::{current_path, follow_error_redirect, follow_form_redirect, redirect_to};

mod auth;
pub use auth::{use_auth, AuthContext, AuthProvider, LogoutButton};

mod departments;
pub use departments::{use_departments, DepartmentContext, DepartmentProvider};

mod guard;
pub use guard::RequireSession;

mod navbar;
pub use navbar::{is_active, NavItem, Navbar, NAV_ITEMS};

mod sidebar;
pub use sidebar::Sidebar;
