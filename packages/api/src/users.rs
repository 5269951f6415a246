//! `/users` endpoints.

use serde_json::Value;

use crate::client::{encode_component, ApiClient, ApiRequest, Transport};
use crate::envelope::{coerce_list, Envelope};
use crate::error::ApiError;
use crate::models::{UpdateUserRequest, User};

pub const ME_PATH: &str = "/users/me";

/// The logged-in user, or `None` when the API answers without one.
///
/// A guest gets a 401 here; that is an `Err`, and the auth store treats it
/// as "anonymous".
pub async fn me<T: Transport>(client: &ApiClient<T>) -> Result<Option<User>, ApiError> {
    let value = client.send_value(ApiRequest::get(ME_PATH)).await?;
    let data = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    if data.is_null() {
        return Ok(None);
    }
    serde_json::from_value(data)
        .map(Some)
        .map_err(|e| ApiError::decode(ME_PATH, e))
}

pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<User>, ApiError> {
    let envelope: Envelope<Value> = client.send(ApiRequest::get("/users")).await?;
    Ok(coerce_list(envelope.data, "user"))
}

pub async fn get<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<User, ApiError> {
    let path = format!("/users/{}", encode_component(id));
    let envelope: Envelope<User> = client.send(ApiRequest::get(path)).await?;
    Ok(envelope.data)
}

pub async fn update<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    changes: &UpdateUserRequest,
) -> Result<User, ApiError> {
    let path = format!("/users/{}", encode_component(id));
    let envelope: Envelope<User> = client.send(ApiRequest::patch(path).json(changes)?).await?;
    Ok(envelope.data)
}
