use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clickup::api::FoldersApi;
use crate::clickup::error::ApiResult;
use crate::clickup::http::Http;

pub struct FoldersClient {
    http: Arc<Http>,
}

impl FoldersClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl FoldersApi for FoldersClient {
    async fn folders_in_space(&self, space_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .get(&format!("/v2/space/{space_id}/folder"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn folder(&self, folder_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .get(&format!("/v2/folder/{folder_id}"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn create_folder(&self, space_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v2/space/{space_id}/folder"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn update_folder(&self, folder_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        let response = self
            .http
            .put(&format!("/v2/folder/{folder_id}"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn delete_folder(&self, folder_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .delete(&format!("/v2/folder/{folder_id}"))
            .send()
            .await?;
        Http::handle_response(response).await
    }
}
