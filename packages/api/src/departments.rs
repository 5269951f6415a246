//! `/departments` and `/divisions` endpoints.
//!
//! The department list is the one payload the portal has seen arrive in
//! several shapes: a bare array, an envelope, or an object holding the array
//! under some other key. [`list`] accepts all three and reports anything else
//! as [`ApiError::Malformed`].

use serde_json::Value;

use crate::client::{encode_component, ApiClient, ApiRequest, Transport};
use crate::envelope::{coerce_list, json_kind, record_with_id};
use crate::error::ApiError;
use crate::models::{Department, Division};

const LIST_PATH: &str = "/departments";

pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Department>, ApiError> {
    let value = client.send_value(ApiRequest::get(LIST_PATH)).await?;
    match find_list(value) {
        Ok(items) => Ok(coerce_list(items, "department")),
        Err(kind) => {
            tracing::error!("Unexpected department data format: {kind}");
            Err(ApiError::Malformed {
                endpoint: LIST_PATH.to_string(),
                reason: format!("expected a list of departments, got {kind}"),
            })
        }
    }
}

/// The array inside a list payload, preferring `data` over other keys.
fn find_list(value: Value) -> Result<Value, &'static str> {
    match value {
        Value::Array(_) => Ok(value),
        Value::Object(mut map) => {
            if map.get("data").is_some_and(Value::is_array) {
                return Ok(map.remove("data").unwrap_or_default());
            }
            let key = map
                .iter()
                .find(|(_, v)| v.is_array())
                .map(|(k, _)| k.clone());
            match key.and_then(|k| map.remove(&k)) {
                Some(items) => Ok(items),
                None => Err("an object without a list"),
            }
        }
        other => Err(json_kind(&other)),
    }
}

/// One department with its divisions and members.
///
/// Answers that carry no department record resolve to `Ok(None)`.
pub async fn by_slug<T: Transport>(
    client: &ApiClient<T>,
    slug: &str,
) -> Result<Option<Department>, ApiError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Err(ApiError::InvalidArgument("department slug is empty".into()));
    }
    let path = format!("/departments/slug/{}", encode_component(slug));
    let value = client.send_value(ApiRequest::get(path.as_str())).await?;

    let Some(record) = record_with_id(value) else {
        tracing::error!("Invalid department data structure for {slug}");
        return Ok(None);
    };
    serde_json::from_value(record)
        .map(Some)
        .map_err(|e| ApiError::decode(&path, e))
}

pub async fn division<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<Option<Division>, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::InvalidArgument("division id is empty".into()));
    }
    let path = format!("/divisions/{}", encode_component(id));
    let value = client.send_value(ApiRequest::get(path.as_str())).await?;

    let Some(record) = record_with_id(value) else {
        tracing::error!("Invalid division data structure for {id}");
        return Ok(None);
    };
    serde_json::from_value(record)
        .map(Some)
        .map_err(|e| ApiError::decode(&path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::mock::MockTransport;
    use serde_json::json;

    fn dept(id: &str, slug: &str) -> Value {
        json!({ "id": id, "department": slug.to_uppercase(), "slug": slug, "divisions": [] })
    }

    async fn list_with(body: Value) -> Result<Vec<Department>, ApiError> {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/departments", 200, body);
        list(&ApiClient::new(mock)).await
    }

    #[tokio::test]
    async fn test_list_accepts_every_known_shape() {
        let bare = list_with(json!([dept("d1", "bph"), { "id": 3 }])).await.unwrap();
        assert_eq!(bare.len(), 1);

        let enveloped = list_with(json!({ "status": 200, "data": [dept("d1", "bph")] }))
            .await
            .unwrap();
        assert_eq!(enveloped[0].slug, "bph");

        let other_key = list_with(json!({ "status": 200, "departments": [dept("d2", "ristek")] }))
            .await
            .unwrap();
        assert_eq!(other_key[0].id, "d2");
    }

    #[tokio::test]
    async fn test_list_without_array_is_malformed() {
        let err = list_with(json!({ "status": 200, "data": { "id": "d1" } }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));

        let err = list_with(json!("departments")).await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_by_slug() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/departments/slug/ristek",
            200,
            json!({ "status": 200, "data": {
                "id": "d2", "department": "Ristek", "slug": "ristek",
                "divisions": [{ "id": "v1", "division": "Web", "members": null }]
            } }),
        );
        mock.respond(Method::Get, "/departments/slug/empty", 200, json!({ "status": 200, "data": {} }));
        let client = ApiClient::new(mock.clone());

        let found = by_slug(&client, "ristek").await.unwrap().unwrap();
        assert!(found.divisions[0].members.is_empty());
        assert_eq!(by_slug(&client, "empty").await, Ok(None));

        assert!(matches!(
            by_slug(&client, "  ").await,
            Err(ApiError::InvalidArgument(_))
        ));
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_division_trims_and_encodes_id() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/divisions/a%2Fb",
            200,
            json!({ "id": "a/b", "division": "Media", "members": [] }),
        );
        let client = ApiClient::new(mock);
        let division = division(&client, " a/b ").await.unwrap().unwrap();
        assert_eq!(division.division, "Media");
    }
}
