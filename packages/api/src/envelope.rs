//! Response envelope shared by every endpoint.
//!
//! Successful answers look like `{status, message, data}`; list endpoints add
//! `meta: {currentPage, totalPages, totalItems, itemsPerPage}`. Error answers
//! carry `{status, message, errors?}`.
//!
//! List fields are decoded leniently: anything that is not an array becomes an
//! empty vector (with a warning), and elements that do not match the record
//! shape are skipped. Downstream code never sees a wrong shape.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `{status, message, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// Pagination block of list responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items_per_page: u32,
}

impl PageMeta {
    /// Current page, treating a missing value as page 1.
    pub fn current(&self) -> u32 {
        self.current_page.max(1)
    }

    /// Page count, treating a missing value as a single page.
    pub fn total(&self) -> u32 {
        self.total_pages.max(1)
    }
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Paginated<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Vec::new", deserialize_with = "lenient_vec")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorBody {
    /// Parse an error body, giving up quietly on anything that is not JSON.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// Accept either a bare record or one wrapped in an envelope's `data`.
pub fn unwrap_data<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    if let Value::Object(map) = &value {
        if let Some(inner) = map.get("data") {
            if inner.is_object() || inner.is_array() {
                if let Ok(data) = serde_json::from_value(inner.clone()) {
                    return Ok(data);
                }
            }
        }
    }
    serde_json::from_value(value)
}

/// The record in `value` that carries an `id`: the value itself, or its
/// envelope's `data`.
pub fn record_with_id(value: Value) -> Option<Value> {
    let has_id = |v: &Value| v.get("id").is_some_and(|id| !id.is_null());
    if has_id(&value) {
        return Some(value);
    }
    match value {
        Value::Object(mut map) => map.remove("data").filter(|data| has_id(data)),
        _ => None,
    }
}

/// Decode a list, coercing non-arrays to empty and dropping bad elements.
pub fn coerce_list<T: DeserializeOwned>(value: Value, what: &str) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping invalid {what} entry: {e}");
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(
                "Expected a list of {what}, got {}; using empty list",
                json_kind(&other)
            );
            Vec::new()
        }
    }
}

/// `deserialize_with` adapter around [`coerce_list`].
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_list(value, short_type_name::<T>()))
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GalleryEvent;
    use serde_json::json;

    #[test]
    fn test_paginated_meta_defaults() {
        let page: Paginated<GalleryEvent> = serde_json::from_value(json!({
            "status": 200,
            "message": "ok",
            "data": []
        }))
        .unwrap();
        assert_eq!(page.meta.current(), 1);
        assert_eq!(page.meta.total(), 1);
    }

    #[test]
    fn test_paginated_data_object_becomes_empty() {
        let page: Paginated<GalleryEvent> = serde_json::from_value(json!({
            "status": 200,
            "message": "ok",
            "data": { "unexpected": true },
            "meta": { "currentPage": 2, "totalPages": 4, "totalItems": 40, "itemsPerPage": 10 }
        }))
        .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.meta.current(), 2);
        assert_eq!(page.meta.items_per_page, 10);
    }

    #[test]
    fn test_coerce_list_skips_bad_entries() {
        let events: Vec<GalleryEvent> = coerce_list(
            json!([{ "id": "e1", "name": "Makrab" }, { "name": "no id" }, 7]),
            "event",
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "e1");
    }

    #[test]
    fn test_unwrap_data_accepts_both_shapes() {
        let bare: GalleryEvent = unwrap_data(json!({ "id": "e1", "name": "PBAK" })).unwrap();
        let wrapped: GalleryEvent = unwrap_data(json!({
            "status": 200,
            "message": "ok",
            "data": { "id": "e1", "name": "PBAK" }
        }))
        .unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_record_with_id() {
        let bare = json!({ "id": "d1", "division": "Web" });
        assert_eq!(record_with_id(bare.clone()), Some(bare.clone()));
        assert_eq!(
            record_with_id(json!({ "status": 200, "data": bare.clone() })),
            Some(bare)
        );
        assert_eq!(record_with_id(json!({ "status": 200, "data": null })), None);
        assert_eq!(record_with_id(json!({ "status": 200, "data": { "id": null } })), None);
    }

    #[test]
    fn test_error_body_parse() {
        let body = ErrorBody::parse(r#"{"status":422,"message":"Invalid","errors":{"email":["taken"]}}"#)
            .unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid"));
        assert_eq!(body.errors.unwrap()["email"], vec!["taken".to_string()]);
        assert!(ErrorBody::parse("<html>").is_none());
    }
}
