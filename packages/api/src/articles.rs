//! `/articles` endpoints (the blog).

use crate::auth::message_of;
use crate::client::{encode_component, ApiClient, ApiRequest, Transport};
use crate::envelope::Paginated;
use crate::error::ApiError;
use crate::models::{Article, MessageData};

/// Articles per page on the blog list.
pub const PAGE_SIZE: u32 = 6;

pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    page: u32,
    limit: u32,
) -> Result<Paginated<Article>, ApiError> {
    let request = ApiRequest::get("/articles")
        .query("page", page.max(1))
        .query("limit", limit);
    client.send(request).await
}

pub async fn get<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<Article, ApiError> {
    client.send_unwrapped(ApiRequest::get(path(id))).await
}

pub async fn like<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<MessageData, ApiError> {
    let value = client
        .send_value(ApiRequest::post(format!("{}/like", path(id))))
        .await?;
    Ok(message_of(value))
}

pub async fn unlike<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
) -> Result<MessageData, ApiError> {
    let value = client
        .send_value(ApiRequest::delete(format!("{}/like", path(id))))
        .await?;
    Ok(message_of(value))
}

fn path(id: &str) -> String {
    format!("/articles/{}", encode_component(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_sends_paging_query() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/articles",
            200,
            json!({
                "status": 200,
                "message": "ok",
                "data": [{ "id": "a1", "title": "Hello", "_count": { "likes": 1 } }],
                "meta": { "currentPage": 2, "totalPages": 3, "totalItems": 13, "itemsPerPage": 6 }
            }),
        );
        let client = ApiClient::new(mock.clone());

        let page = list(&client, 2, PAGE_SIZE).await.unwrap();
        assert_eq!(page.data[0].title, "Hello");
        assert_eq!(page.meta.total(), 3);

        let sent = &mock.requests()[0];
        assert_eq!(
            sent.query,
            vec![("page".to_string(), "2".to_string()), ("limit".to_string(), "6".to_string())]
        );
    }

    #[tokio::test]
    async fn test_get_accepts_bare_record() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/articles/a1",
            200,
            json!({ "id": "a1", "title": "Bare", "likes": [], "is_liked": false }),
        );
        let client = ApiClient::new(mock);
        assert_eq!(get(&client, "a1").await.unwrap().title, "Bare");
    }

    #[tokio::test]
    async fn test_missing_article_points_to_404_page() {
        let mock = MockTransport::new();
        let client = ApiClient::new(mock);
        let err = get(&client, "missing").await.unwrap_err();
        assert_eq!(err.redirect_target("/blog/missing").as_deref(), Some("/404"));
    }

    #[tokio::test]
    async fn test_like_and_unlike() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/articles/a1/like",
            201,
            json!({ "status": 201, "data": { "message": "Article liked" } }),
        );
        mock.respond(
            Method::Delete,
            "/articles/a1/like",
            200,
            json!({ "status": 200, "message": "Article unliked", "data": null }),
        );
        let client = ApiClient::new(mock);
        assert_eq!(like(&client, "a1").await.unwrap().message, "Article liked");
        assert_eq!(unlike(&client, "a1").await.unwrap().message, "Article unliked");
    }
}
