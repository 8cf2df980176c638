use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clickup::api::DocsApi;
use crate::clickup::error::ApiResult;
use crate::clickup::http::{Http, query_pairs};
use crate::clickup::models::Page;

pub struct DocsClient {
    http: Arc<Http>,
}

impl DocsClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl DocsApi for DocsClient {
    async fn docs_in_workspace(
        &self,
        workspace_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .get(&format!("/v3/workspaces/{workspace_id}/docs"))
            .query(&query_pairs(query))
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn doc_pages(
        &self,
        workspace_id: &str,
        doc_id: &str,
        content_format: &str,
    ) -> ApiResult<Vec<Page>> {
        let response = self
            .http
            .get(&format!("/v3/workspaces/{workspace_id}/docs/{doc_id}/pages"))
            .query(&[
                ("max_page_depth", "-1"),
                ("content_format", content_format),
            ])
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn search(
        &self,
        workspace_id: &str,
        query: &str,
        cursor: Option<&str>,
    ) -> ApiResult<Value> {
        // A "space:<id>" query searches by space instead of by name.
        let mut pairs: Vec<(&str, String)> = match query.strip_prefix("space:") {
            Some(space_id) => vec![("space_id", space_id.to_string())],
            None => vec![("doc_name", query.to_string())],
        };
        if let Some(cursor) = cursor {
            pairs.push(("cursor", cursor.to_string()));
        }
        let response = self
            .http
            .get(&format!("/v2/team/{workspace_id}/docs/search"))
            .query(&pairs)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn create_doc_in_list(
        &self,
        list_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v3/lists/{list_id}/docs"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn create_doc_in_folder(
        &self,
        folder_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v3/folders/{folder_id}/docs"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn update_doc(&self, doc_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        let response = self
            .http
            .put(&format!("/v3/docs/{doc_id}"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }
}
