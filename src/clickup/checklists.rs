use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clickup::api::ChecklistsApi;
use crate::clickup::error::ApiResult;
use crate::clickup::http::Http;

pub struct ChecklistsClient {
    http: Arc<Http>,
}

impl ChecklistsClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChecklistsApi for ChecklistsClient {
    async fn create_checklist(
        &self,
        task_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v2/task/{task_id}/checklist"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn update_checklist(
        &self,
        checklist_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .put(&format!("/v2/checklist/{checklist_id}"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn delete_checklist(&self, checklist_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .delete(&format!("/v2/checklist/{checklist_id}"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn create_checklist_item(
        &self,
        checklist_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v2/checklist/{checklist_id}/checklist_item"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn update_checklist_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .put(&format!(
                "/v2/checklist/{checklist_id}/checklist_item/{item_id}"
            ))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn delete_checklist_item(&self, checklist_id: &str, item_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .delete(&format!(
                "/v2/checklist/{checklist_id}/checklist_item/{item_id}"
            ))
            .send()
            .await?;
        Http::handle_response(response).await
    }
}
