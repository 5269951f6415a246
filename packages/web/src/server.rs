//! axum pieces of the web host.

use std::sync::Arc;

use api::{GuardDecision, RouteGuard};
use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Router;

/// Joined `Cookie` headers of a request, if it sent any.
fn cookie_header(request: &Request) -> Option<String> {
    let values: Vec<&str> = request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    (!values.is_empty()).then(|| values.join("; "))
}

/// Sends visitors without a session cookie away from protected pages.
pub async fn route_guard(
    State(guard): State<Arc<RouteGuard>>,
    request: Request,
    next: Next,
) -> Response {
    let cookies = cookie_header(&request);
    let decision = guard.check(request.uri().path(), cookies.as_deref());
    match decision {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect(target) => {
            tracing::info!("No session for {}, redirecting to {target}", request.uri().path());
            Redirect::temporary(&target).into_response()
        }
    }
}

pub fn with_route_guard(router: Router, guard: RouteGuard) -> Router {
    router.layer(middleware::from_fn_with_state(Arc::new(guard), route_guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::LOCATION;
    use axum::http::StatusCode;
    use axum::routing::get;
    use tower::ServiceExt;

    fn app() -> Router {
        let router = Router::new()
            .route("/", get(|| async { "home" }))
            .route("/user", get(|| async { "settings" }))
            .route("/forum/create", get(|| async { "new post" }));
        with_route_guard(router, RouteGuard::default())
    }

    fn get_request(path: &str, cookie: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_protected_page_redirects_to_login() {
        let response = app().oneshot(get_request("/user", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[LOCATION], "/auth/login?from=%2Fuser");
    }

    #[tokio::test]
    async fn test_session_cookie_lets_request_through() {
        let response = app()
            .oneshot(get_request("/forum/create", Some("theme=dark; jwt=abc")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_public_page_needs_no_cookie() {
        let response = app().oneshot(get_request("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
