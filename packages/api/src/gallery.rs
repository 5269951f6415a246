//! `/galleries` and `/events` endpoints.

use serde_json::Value;

use crate::client::{encode_component, ApiClient, ApiRequest, Transport};
use crate::envelope::{coerce_list, Envelope, Paginated};
use crate::error::ApiError;
use crate::models::{EventGallery, GalleryEvent, GalleryItem};

/// Events per page on the gallery.
pub const PAGE_SIZE: u32 = 12;

/// Events, each with a preview of its photos.
pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    page: u32,
    limit: u32,
) -> Result<Paginated<GalleryEvent>, ApiError> {
    let request = ApiRequest::get("/galleries")
        .query("page", page.max(1))
        .query("limit", limit);
    client.send(request).await
}

pub async fn item<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<GalleryItem, ApiError> {
    let path = format!("/galleries/{}", encode_component(id));
    let envelope: Envelope<GalleryItem> = client.send(ApiRequest::get(path)).await?;
    Ok(envelope.data)
}

/// Every photo of one event.
pub async fn event_gallery<T: Transport>(
    client: &ApiClient<T>,
    event_id: &str,
) -> Result<EventGallery, ApiError> {
    let path = format!("/galleries/event/{}", encode_component(event_id));
    client.send_unwrapped(ApiRequest::get(path)).await
}

pub async fn events<T: Transport>(client: &ApiClient<T>) -> Result<Vec<GalleryEvent>, ApiError> {
    let envelope: Envelope<Value> = client.send(ApiRequest::get("/events")).await?;
    Ok(coerce_list(envelope.data, "event"))
}

pub async fn event<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<GalleryEvent, ApiError> {
    let path = format!("/events/{}", encode_component(id));
    client.send_unwrapped(ApiRequest::get(path)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_tolerates_malformed_gallery() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/galleries",
            200,
            json!({
                "status": 200,
                "data": [
                    { "id": "e1", "name": "PBAK", "gallery": "n/a", "total_gallery_items": 0 },
                    { "id": "e2", "name": "Makrab", "gallery": [{ "id": "g1", "event_id": "e2", "photo_url": "u" }] }
                ],
                "meta": { "currentPage": 1, "totalPages": 2, "totalItems": 13, "itemsPerPage": 12 }
            }),
        );
        let client = ApiClient::new(mock);

        let page = list(&client, 1, PAGE_SIZE).await.unwrap();
        assert!(page.data[0].gallery.is_empty());
        assert_eq!(page.data[1].photo_count(), 1);
        assert_eq!(page.meta.total(), 2);
    }

    #[tokio::test]
    async fn test_event_gallery_is_bare_or_enveloped() {
        let mock = MockTransport::new();
        let body = json!({ "id": "e1", "name": "PBAK", "gallery": [], "total_gallery_items": 0 });
        mock.respond(Method::Get, "/galleries/event/e1", 200, body.clone());
        mock.respond(
            Method::Get,
            "/galleries/event/e2",
            200,
            json!({ "status": 200, "data": { "id": "e2", "name": "Makrab", "gallery": [] } }),
        );
        let client = ApiClient::new(mock);

        assert_eq!(event_gallery(&client, "e1").await.unwrap().name, "PBAK");
        assert_eq!(event_gallery(&client, "e2").await.unwrap().name, "Makrab");
    }

    #[tokio::test]
    async fn test_events_and_item() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/events",
            200,
            json!({ "status": 200, "data": [{ "id": "e1", "name": "PBAK" }] }),
        );
        mock.respond(
            Method::Get,
            "/galleries/g1",
            200,
            json!({ "status": 200, "data": { "id": "g1", "event_id": "e1", "photo_url": "u" } }),
        );
        let client = ApiClient::new(mock);

        assert_eq!(events(&client).await.unwrap()[0].name, "PBAK");
        assert_eq!(item(&client, "g1").await.unwrap().event_id, "e1");
    }
}
