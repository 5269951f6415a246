//! HTTP transport and response classification.
//!
//! The [`Transport`] trait is the seam between the portal and the network: it
//! sends one [`ApiRequest`] and hands back the raw status and body. [`ApiClient`]
//! sits on top of any transport and turns non-2xx answers into [`ApiError`]s and
//! 2xx bodies into typed values.

use std::future::Future;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::envelope::{unwrap_data, ErrorBody};
use crate::error::ApiError;

/// Characters left alone by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment or query value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, e.g. `/forums/42/like`. Never carries a query string.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::InvalidArgument(format!("unserializable body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Status and body as received from the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async trait for sending requests to the portal API.
pub trait Transport {
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>>;
}

/// reqwest-backed transport.
///
/// Cookies always travel with the request: native builds keep a cookie jar,
/// browser builds ask `fetch` to include credentials. Native builds also apply
/// the configured request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        reqwest::Url::parse(&config.base_url).map_err(|e| {
            ApiError::InvalidArgument(format!("invalid API base URL {}: {e}", config.base_url))
        })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let builder = reqwest::Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(config.timeout_secs));

        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path)
    }
}

/// Two transports are equal when they talk to the same API.
impl PartialEq for HttpTransport {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method.into(), self.url_for(request));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let response = builder.send().await.map_err(ApiError::from_reqwest)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::from_reqwest)?;
        Ok(RawResponse { status, body })
    }
}

/// Typed client over a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient<T: Transport> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Client talking to the API described by `config`.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and return the JSON body of a 2xx answer.
    ///
    /// Empty bodies decode to `null`. Non-2xx answers become [`ApiError::Http`]
    /// carrying the server's `message` when the body has one.
    pub async fn send_value(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let response = self.transport.send(&request).await?;

        if !response.is_success() {
            let message = ErrorBody::parse(&response.body).and_then(|body| body.message);
            if response.status == 401 {
                tracing::error!("Unauthorized request: {}", request.path);
            } else {
                tracing::warn!(
                    "{} {} failed with status {}",
                    request.method.as_str(),
                    request.path,
                    response.status
                );
            }
            return Err(ApiError::Http {
                status: response.status,
                endpoint: request.path,
                message,
            });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::decode(&request.path, e))
    }

    /// Send a request and decode the whole body as `R`.
    pub async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let endpoint = request.path.clone();
        let value = self.send_value(request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::decode(&endpoint, e))
    }

    /// Send a request whose answer may or may not be wrapped in an envelope.
    pub async fn send_unwrapped<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<R, ApiError> {
        let endpoint = request.path.clone();
        let value = self.send_value(request).await?;
        unwrap_data(value).map_err(|e| ApiError::decode(&endpoint, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;

    #[test]
    fn test_encode_component_matches_uri_component_rules() {
        assert_eq!(encode_component("/forum/create"), "%2Fforum%2Fcreate");
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_component("keep-_.!~*'()"), "keep-_.!~*'()");
    }

    #[test]
    fn test_http_transport_rejects_bad_base_url() {
        let config = ApiConfig::new("not a url");
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ApiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_http_transport_joins_base_path() {
        let transport = HttpTransport::new(&ApiConfig::new("https://api.example.org/v1/")).unwrap();
        let url = transport.url_for(&ApiRequest::get("/users/me"));
        assert_eq!(url, "https://api.example.org/v1/users/me");
    }

    #[tokio::test]
    async fn test_non_success_carries_server_message() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/auth/register",
            409,
            json!({ "status": 409, "message": "Email already registered" }),
        );
        let client = ApiClient::new(mock);

        let err = client
            .send_value(ApiRequest::post("/auth/register"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back_to_status_text() {
        let mock = MockTransport::new();
        mock.respond_raw(Method::Get, "/forums", RawResponse::new(502, "<html>bad gateway</html>"));
        let client = ApiClient::new(mock);

        let err = client.send_value(ApiRequest::get("/forums")).await.unwrap_err();
        assert_eq!(err.user_message(), "Request failed with status code 502");
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let mock = MockTransport::new();
        mock.respond_raw(Method::Post, "/auth/logout", RawResponse::new(204, ""));
        let client = ApiClient::new(mock);

        let value = client.send_value(ApiRequest::post("/auth/logout")).await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let mock = MockTransport::new();
        mock.respond_raw(Method::Get, "/articles", RawResponse::new(200, "{not json"));
        let client = ApiClient::new(mock);

        let err = client.send_value(ApiRequest::get("/articles")).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }
}
