use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clickup::api::TasksApi;
use crate::clickup::error::ApiResult;
use crate::clickup::http::{Http, query_pairs};
use crate::clickup::models::{Task, TaskPage};

pub struct TasksClient {
    http: Arc<Http>,
}

impl TasksClient {
    pub(crate) fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    async fn tasks_under(&self, path: String, query: &Map<String, Value>) -> ApiResult<TaskPage> {
        let response = self.http.get(&path).query(&query_pairs(query)).send().await?;
        Http::handle_response(response).await
    }
}

#[async_trait]
impl TasksApi for TasksClient {
    async fn tasks_in_list(
        &self,
        list_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<TaskPage> {
        self.tasks_under(format!("/v2/list/{list_id}/task"), query).await
    }

    async fn tasks_in_folder(
        &self,
        folder_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<TaskPage> {
        self.tasks_under(format!("/v2/folder/{folder_id}/task"), query).await
    }

    async fn tasks_in_space(
        &self,
        space_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<TaskPage> {
        self.tasks_under(format!("/v2/space/{space_id}/task"), query).await
    }

    async fn task(&self, task_id: &str, include_subtasks: bool) -> ApiResult<Task> {
        let mut request = self.http.get(&format!("/v2/task/{task_id}"));
        if include_subtasks {
            request = request.query(&[("include_subtasks", "true")]);
        }
        Http::handle_response(request.send().await?).await
    }

    async fn create_task(&self, list_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        let response = self
            .http
            .post(&format!("/v2/list/{list_id}/task"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn update_task(&self, task_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        let response = self
            .http
            .put(&format!("/v2/task/{task_id}"))
            .json(body)
            .send()
            .await?;
        Http::handle_response(response).await
    }

    async fn delete_task(&self, task_id: &str) -> ApiResult<Value> {
        let response = self
            .http
            .delete(&format!("/v2/task/{task_id}"))
            .send()
            .await?;
        Http::handle_response(response).await
    }
}
