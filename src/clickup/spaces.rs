use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::clickup::api::SpacesApi;
use crate::clickup::error::ApiResult;
use crate::clickup::http::Http;

pub struct SpacesClient {
    http: Arc<Http>,
}

impl SpacesClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl SpacesApi for SpacesClient {
    async fn spaces(&self, workspace_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .get(&format!("/v2/team/{workspace_id}/space"))
            .send()
            .await?;
        let body: Value = Http::handle_response(response).await?;
        Ok(body
            .get("spaces")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    async fn space(&self, space_id: &str) -> ApiResult<Value> {
        let response = self.http.get(&format!("/v2/space/{space_id}")).send().await?;
        Http::handle_response(response).await
    }
}
