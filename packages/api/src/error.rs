//! Errors returned by every service call.

use thiserror::Error;

/// Anything that can go wrong between a page and the API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, CORS, ...).
    #[error("{0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Http {
        status: u16,
        endpoint: String,
        /// `message` field of the error body, when the server sent one.
        message: Option<String>,
    },

    /// A 2xx body that is not the JSON we expected.
    #[error("Invalid response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// A list endpoint answered with something that holds no list at all.
    #[error("Malformed payload from {endpoint}: {reason}")]
    Malformed { endpoint: String, reason: String },

    /// The call was rejected before anything was sent.
    #[error("{0}")]
    InvalidArgument(String),
}

/// Coarse classification used by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    OtherStatus,
    Network,
    Payload,
    Argument,
}

impl ApiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err.to_string())
        }
    }

    pub(crate) fn decode(endpoint: &str, err: serde_json::Error) -> Self {
        ApiError::Decode {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }

    /// HTTP status of the response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Endpoint path the failed request was sent to.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            ApiError::Http { endpoint, .. }
            | ApiError::Decode { endpoint, .. }
            | ApiError::Malformed { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Http { status: 401, .. } => ErrorKind::Unauthorized,
            ApiError::Http { status: 403, .. } => ErrorKind::Forbidden,
            ApiError::Http { status: 404, .. } => ErrorKind::NotFound,
            ApiError::Http { status, .. } if *status >= 500 => ErrorKind::ServerError,
            ApiError::Http { .. } => ErrorKind::OtherStatus,
            ApiError::Transport(_) | ApiError::Timeout => ErrorKind::Network,
            ApiError::Decode { .. } | ApiError::Malformed { .. } => ErrorKind::Payload,
            ApiError::InvalidArgument(_) => ErrorKind::Argument,
        }
    }

    /// The server's own explanation, if it sent a non-blank one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text shown to the user: the server's message, else this error's own.
    pub fn user_message(&self) -> String {
        match self.server_message() {
            Some(message) => message.to_string(),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16, message: Option<&str>) -> ApiError {
        ApiError::Http {
            status,
            endpoint: "/forums".into(),
            message: message.map(String::from),
        }
    }

    #[test]
    fn test_kind_follows_status() {
        assert_eq!(http(401, None).kind(), ErrorKind::Unauthorized);
        assert_eq!(http(403, None).kind(), ErrorKind::Forbidden);
        assert_eq!(http(404, None).kind(), ErrorKind::NotFound);
        assert_eq!(http(503, None).kind(), ErrorKind::ServerError);
        assert_eq!(http(422, None).kind(), ErrorKind::OtherStatus);
        assert_eq!(ApiError::Timeout.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        assert_eq!(http(400, Some("Title is required")).user_message(), "Title is required");
        assert_eq!(
            http(400, Some("   ")).user_message(),
            "Request failed with status code 400"
        );
        assert_eq!(
            ApiError::Transport("Network Error".into()).user_message(),
            "Network Error"
        );
    }
}
