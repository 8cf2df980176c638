use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::clickup::api::AuthApi;
use crate::clickup::error::ApiResult;
use crate::clickup::http::Http;

pub struct AuthClient {
    http: Arc<Http>,
}

impl AuthClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn authorized_user(&self) -> ApiResult<Value> {
        let response = self.http.get("/v2/user").send().await?;
        Http::handle_response(response).await
    }

    async fn workspaces(&self) -> ApiResult<Value> {
        let response = self.http.get("/v2/team").send().await?;
        let body: Value = Http::handle_response(response).await?;
        Ok(body
            .get("teams")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    async fn workspace_seats(&self, workspace_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .get(&format!("/v2/team/{workspace_id}/seats"))
            .send()
            .await?;
        Http::handle_response(response).await
    }
}
