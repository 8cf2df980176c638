use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clickup::api::CommentsApi;
use crate::clickup::error::ApiResult;
use crate::clickup::http::{Http, query_pairs};

pub struct CommentsClient {
    http: Arc<Http>,
}

impl CommentsClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    async fn comments_at(&self, path: String, query: &Map<String, Value>) -> ApiResult<Value> {
        let response = self.http.get(&path).query(&query_pairs(query)).send().await?;
        Http::handle_response(response).await
    }

    async fn post_at(&self, path: String, body: &Map<String, Value>) -> ApiResult<Value> {
        let response = self.http.post(&path).json(body).send().await?;
        Http::handle_response(response).await
    }
}

#[async_trait]
impl CommentsApi for CommentsClient {
    async fn task_comments(&self, task_id: &str, query: &Map<String, Value>) -> ApiResult<Value> {
        self.comments_at(format!("/v2/task/{task_id}/comment"), query).await
    }

    async fn create_task_comment(
        &self,
        task_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.post_at(format!("/v2/task/{task_id}/comment"), body).await
    }

    async fn chat_view_comments(
        &self,
        view_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.comments_at(format!("/v2/view/{view_id}/comment"), query).await
    }

    async fn create_chat_view_comment(
        &self,
        view_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.post_at(format!("/v2/view/{view_id}/comment"), body).await
    }

    async fn list_comments(&self, list_id: &str, query: &Map<String, Value>) -> ApiResult<Value> {
        self.comments_at(format!("/v2/list/{list_id}/comment"), query).await
    }

    async fn create_list_comment(
        &self,
        list_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.post_at(format!("/v2/list/{list_id}/comment"), body).await
    }

    async fn update_comment(
        &self,
        comment_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .put(&format!("/v2/comment/{comment_id}"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn delete_comment(&self, comment_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .delete(&format!("/v2/comment/{comment_id}"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn threaded_comments(
        &self,
        comment_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.comments_at(format!("/v2/comment/{comment_id}/reply"), query).await
    }

    async fn create_threaded_comment(
        &self,
        comment_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.post_at(format!("/v2/comment/{comment_id}/reply"), body).await
    }
}
