//! Shared API client, built once and handed down through context.

use api::{ApiClient, ApiConfig, ApiError, HttpTransport};
use dioxus::prelude::*;

pub type PortalClient = ApiClient<HttpTransport>;

/// Client for the API named by `PORTAL_API_BASE_URL`.
pub fn make_client() -> Result<PortalClient, ApiError> {
    let config = ApiConfig::from_env();
    tracing::info!("Using API at {}", config.base_url);
    ApiClient::from_config(&config)
}

/// Makes `client` available to [`use_client`] below this component.
#[component]
pub fn ClientProvider(client: PortalClient, children: Element) -> Element {
    use_context_provider(|| client.clone());

    rsx! {
        {children}
    }
}

pub fn use_client() -> PortalClient {
    use_context::<PortalClient>()
}
