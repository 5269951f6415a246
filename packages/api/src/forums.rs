//! `/forums` endpoints.

use crate::client::{encode_component, ApiClient, ApiRequest, Transport};
use crate::envelope::{unwrap_data, Envelope, Paginated};
use crate::error::ApiError;
use crate::models::{
    Comment, CommentRequest, CreateForumRequest, Forum, ForumQuery, ForumStatus, LikeCount,
    UpdateForumRequest, UpdateForumStatusRequest,
};

/// Forum posts per page on the forum list.
pub const PAGE_SIZE: u32 = 10;

pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    draft: &CreateForumRequest,
) -> Result<Forum, ApiError> {
    let envelope: Envelope<Forum> = client.send(ApiRequest::post("/forums").json(draft)?).await?;
    Ok(envelope.data)
}

pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    query: &ForumQuery,
) -> Result<Paginated<Forum>, ApiError> {
    let request = ApiRequest::get("/forums")
        .query_opt("status", query.status.map(|s| s.as_str()))
        .query_opt("page", query.page)
        .query_opt("limit", query.limit);
    client.send(request).await
}

/// Posts written by the logged-in user.
pub async fn mine<T: Transport>(client: &ApiClient<T>) -> Result<Paginated<Forum>, ApiError> {
    client.send(ApiRequest::get("/forums/my-forums")).await
}

pub async fn get<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<Forum, ApiError> {
    let envelope: Envelope<Forum> = client.send(ApiRequest::get(path(id))).await?;
    Ok(envelope.data)
}

pub async fn update<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    changes: &UpdateForumRequest,
) -> Result<Forum, ApiError> {
    let request = ApiRequest::patch(path(id)).json(changes)?;
    let envelope: Envelope<Forum> = client.send(request).await?;
    Ok(envelope.data)
}

pub async fn update_status<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    status: ForumStatus,
) -> Result<Forum, ApiError> {
    let request = ApiRequest::patch(format!("{}/status", path(id)))
        .json(&UpdateForumStatusRequest { status })?;
    let envelope: Envelope<Forum> = client.send(request).await?;
    Ok(envelope.data)
}

pub async fn delete<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<(), ApiError> {
    client.send_value(ApiRequest::delete(path(id))).await?;
    Ok(())
}

/// Like a post, returning the new like count when the API reports one.
pub async fn like<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<LikeCount, ApiError> {
    let value = client
        .send_value(ApiRequest::post(format!("{}/like", path(id))))
        .await?;
    Ok(unwrap_data(value).unwrap_or_default())
}

pub async fn comment<T: Transport>(
    client: &ApiClient<T>,
    id: &str,
    text: &str,
) -> Result<Comment, ApiError> {
    let request = ApiRequest::post(format!("{}/comment", path(id))).json(&CommentRequest {
        comment: text.to_string(),
    })?;
    let envelope: Envelope<Comment> = client.send(request).await?;
    Ok(envelope.data)
}

fn path(id: &str) -> String {
    format!("/forums/{}", encode_component(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::mock::MockTransport;
    use serde_json::json;

    fn forum_json(id: &str) -> serde_json::Value {
        json!({ "id": id, "title": "Hi", "content": "Body", "status": "PUBLISHED", "comments": [] })
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Get,
            "/forums",
            200,
            json!({ "status": 200, "data": [forum_json("f1")], "meta": { "currentPage": 1, "totalPages": 1 } }),
        );
        let client = ApiClient::new(mock.clone());

        let query = ForumQuery::default()
            .with_status(ForumStatus::Published)
            .with_page(1, PAGE_SIZE);
        let page = list(&client, &query).await.unwrap();
        assert_eq!(page.data.len(), 1);

        let sent = &mock.requests()[0];
        assert_eq!(sent.query[0], ("status".to_string(), "PUBLISHED".to_string()));
        assert_eq!(sent.query.len(), 3);
    }

    #[tokio::test]
    async fn test_list_without_filters_sends_no_query() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/forums", 200, json!({ "status": 200, "data": [] }));
        let client = ApiClient::new(mock.clone());
        list(&client, &ForumQuery::default()).await.unwrap();
        assert!(mock.requests()[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_comment_body_field() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/forums/f1/comment",
            201,
            json!({ "status": 201, "data": { "id": "c1", "content": "Nice", "forumId": "f1" } }),
        );
        let client = ApiClient::new(mock.clone());

        let comment = comment(&client, "f1", "Nice").await.unwrap();
        assert_eq!(comment.content, "Nice");
        assert_eq!(mock.requests()[0].body, Some(json!({ "comment": "Nice" })));
    }

    #[tokio::test]
    async fn test_like_and_status_change() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/forums/f1/like",
            200,
            json!({ "status": 200, "data": { "likes": 5 } }),
        );
        mock.respond(
            Method::Patch,
            "/forums/f1/status",
            200,
            json!({ "status": 200, "data": forum_json("f1") }),
        );
        let client = ApiClient::new(mock.clone());

        assert_eq!(like(&client, "f1").await.unwrap().likes, 5);
        update_status(&client, "f1", ForumStatus::Rejected).await.unwrap();
        assert_eq!(mock.requests()[1].body, Some(json!({ "status": "REJECTED" })));
    }

    #[tokio::test]
    async fn test_create_and_delete() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/forums",
            201,
            json!({ "status": 201, "message": "Created", "data": forum_json("f9") }),
        );
        mock.respond(Method::Delete, "/forums/f9", 200, json!({ "status": 200, "data": null }));
        let client = ApiClient::new(mock);

        let draft = CreateForumRequest {
            title: "Hi".into(),
            content: "Body".into(),
            thumbnail: None,
        };
        let forum = create(&client, &draft).await.unwrap();
        assert_eq!(forum.id, "f9");
        assert_eq!(delete(&client, "f9").await, Ok(()));
    }
}
