use dioxus::prelude::*;
use dioxus::router::Navigator;

use ui::{AuthProvider, ClientProvider, DepartmentProvider};
use views::{
    BlogDetail, BlogList, Bph, DepartmentDetail, EventPhotos, Forbidden, ForgotPassword,
    ForumCreate, ForumDetail, ForumList, Gallery, Home, Information, Login, NotFound,
    NotFoundPage, Profile, Register, ServerError, Shell, UserSettings,
};

mod views;

#[cfg(feature = "server")]
mod server;
#[cfg(feature = "server")]
mod settings;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[route("/auth/login?:from")]
    Login { from: String },
    #[route("/auth/register")]
    Register {},
    #[route("/auth/forgot-password")]
    ForgotPassword {},

    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/profile")]
        Profile {},
        #[route("/information")]
        Information {},
        #[route("/bph")]
        Bph {},
        #[route("/departments/:slug")]
        DepartmentDetail { slug: String },
        #[route("/blog")]
        BlogList {},
        #[route("/blog/:id")]
        BlogDetail { id: String },
        #[route("/forum")]
        ForumList {},
        #[route("/forum/create")]
        ForumCreate {},
        #[route("/forum/:id")]
        ForumDetail { id: String },
        #[route("/gallery")]
        Gallery {},
        #[route("/gallery/event/:id")]
        EventPhotos { id: String },
        #[route("/user")]
        UserSettings {},
        #[route("/403")]
        Forbidden {},
        #[route("/404")]
        NotFoundPage {},
        #[route("/500")]
        ServerError {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Router navigation to a path handed up by a shared component.
pub(crate) fn go_to(nav: Navigator, path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(_) => {
            tracing::warn!("No route for {path}, loading it directly");
            ui::redirect_to(path);
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start the tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
            eprintln!("Logger already initialized: {e}");
        }
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = settings::Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Invalid settings, using defaults: {e}");
        settings::Settings::default()
    });
    tracing::info!(
        "Protecting {:?} behind cookies {:?}",
        settings.guard.protected_paths,
        settings.guard.session_cookies
    );

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);
    let router = server::with_route_guard(router, settings.guard);

    // Use the configured address, else the one from dx serve or localhost:8080
    let addr = match settings.address {
        Some(address) => address
            .parse()
            .expect("PORTAL_ADDRESS must be a socket address like 127.0.0.1:8080"),
        None => dioxus::cli_config::fullstack_address_or_localhost(),
    };
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    let client = use_hook(ui::make_client);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::PORTAL_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match client {
            Ok(client) => rsx! {
                ClientProvider {
                    client,
                    AuthProvider {
                        DepartmentProvider {
                            Router::<Route> {}
                        }
                    }
                }
            },
            Err(e) => rsx! {
                ui::components::ErrorMessage { message: format!("The portal is misconfigured: {e}") }
            },
        }
    }
}
