use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clickup::api::ListsApi;
use crate::clickup::error::ApiResult;
use crate::clickup::http::Http;

pub struct ListsClient {
    http: Arc<Http>,
}

impl ListsClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListsApi for ListsClient {
    async fn lists_in_folder(&self, folder_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .get(&format!("/v2/folder/{folder_id}/list"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn folderless_lists(&self, space_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .get(&format!("/v2/space/{space_id}/list"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn create_list(&self, folder_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v2/folder/{folder_id}/list"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn create_folderless_list(
        &self,
        space_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v2/space/{space_id}/list"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn list(&self, list_id: &str) -> ApiResult<Value> {
        let response = self.http.get(&format!("/v2/list/{list_id}")).send().await?;
        Http::handle_response(response).await
    }

    async fn update_list(&self, list_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        let response = self
            .http
            .put(&format!("/v2/list/{list_id}"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn delete_list(&self, list_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .delete(&format!("/v2/list/{list_id}"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn add_task_to_list(&self, list_id: &str, task_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v2/list/{list_id}/task/{task_id}"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn remove_task_from_list(&self, list_id: &str, task_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .delete(&format!("/v2/list/{list_id}/task/{task_id}"))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn create_from_template_in_folder(
        &self,
        folder_id: &str,
        template_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .post(&folder_template_path(folder_id, template_id))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn create_from_template_in_space(
        &self,
        space_id: &str,
        template_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .post(&space_template_path(space_id, template_id))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }
}

// The template endpoints nest under /list/, unlike the other list paths.
fn folder_template_path(folder_id: &str, template_id: &str) -> String {
    format!("/v2/folder/{folder_id}/list/template/{template_id}")
}

fn space_template_path(space_id: &str, template_id: &str) -> String {
    format!("/v2/space/{space_id}/list/template/{template_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_endpoints_nest_under_list() {
        assert_eq!(
            folder_template_path("90115795569", "t-123"),
            "/v2/folder/90115795569/list/template/t-123"
        );
        assert_eq!(
            space_template_path("90113637923", "t-123"),
            "/v2/space/90113637923/list/template/t-123"
        );
    }
}
