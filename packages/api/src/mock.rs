//! In-memory [`Transport`] for tests.
//!
//! Routes are keyed by method and path (query strings are ignored). A route
//! can have a sticky answer, used for every request, and a queue of one-shot
//! answers that take precedence until drained. Requests to unknown routes get
//! a JSON 404. Every request is recorded so tests can assert on what was sent
//! and how often.
//!
//! `send` yields to the executor once before answering, so concurrent callers
//! really do overlap.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use serde_json::{json, Value};

use crate::client::{ApiRequest, Method, RawResponse, Transport};
use crate::error::ApiError;

type Answer = Result<RawResponse, ApiError>;

#[derive(Debug, Default)]
struct Route {
    sticky: Option<Answer>,
    queued: VecDeque<Answer>,
}

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(Method, String), Route>>>,
    log: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(&self, method: Method, path: &str, edit: impl FnOnce(&mut Route)) {
        let mut routes = self.routes.lock().unwrap();
        edit(routes.entry((method, path.to_string())).or_default());
    }

    /// Answer every request to `method path` with `status` and a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.respond_raw(method, path, RawResponse::new(status, body.to_string()));
    }

    pub fn respond_raw(&self, method: Method, path: &str, response: RawResponse) {
        self.route(method, path, |route| route.sticky = Some(Ok(response)));
    }

    /// Answer the next request to `method path` only.
    pub fn respond_once(&self, method: Method, path: &str, status: u16, body: Value) {
        let response = RawResponse::new(status, body.to_string());
        self.route(method, path, |route| route.queued.push_back(Ok(response)));
    }

    /// Fail every request to `method path` before it reaches the "server".
    pub fn fail(&self, method: Method, path: &str, error: ApiError) {
        self.route(method, path, |route| route.sticky = Some(Err(error)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.log.lock().unwrap().len()
    }

    /// Number of requests sent to `method path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn answer(&self, request: &ApiRequest) -> Answer {
        let mut routes = self.routes.lock().unwrap();
        let route = routes.get_mut(&(request.method, request.path.clone()));
        match route {
            Some(route) => match route.queued.pop_front() {
                Some(answer) => answer,
                None => route.sticky.clone().unwrap_or_else(|| not_found(request)),
            },
            None => not_found(request),
        }
    }
}

fn not_found(request: &ApiRequest) -> Answer {
    let body = json!({
        "status": 404,
        "message": format!("No mock response for {} {}", request.method.as_str(), request.path),
    });
    Ok(RawResponse::new(404, body.to_string()))
}

impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.log.lock().unwrap().push(request.clone());
        let answer = self.answer(request);
        YieldOnce(false).await;
        answer
    }
}

/// Pending exactly once, then ready.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_once_answers_take_precedence() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/events", 200, json!({ "data": [] }));
        mock.respond_once(Method::Get, "/events", 500, json!({ "message": "boom" }));

        let first = mock.send(&ApiRequest::get("/events")).await.unwrap();
        let second = mock.send(&ApiRequest::get("/events")).await.unwrap();
        assert_eq!(first.status, 500);
        assert_eq!(second.status, 200);
        assert_eq!(mock.count(Method::Get, "/events"), 2);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let mock = MockTransport::new();
        let response = mock
            .send(&ApiRequest::delete("/forums/1"))
            .await
            .unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_fail_returns_transport_error() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/users/me", ApiError::Timeout);
        let err = mock.send(&ApiRequest::get("/users/me")).await.unwrap_err();
        assert_eq!(err, ApiError::Timeout);
    }
}
