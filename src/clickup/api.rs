use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clickup::error::ApiResult;
use crate::clickup::models::{Page, Task, TaskPage};

/// Access to every ClickUp API category. The MCP layer only sees this
/// trait, so tests inject stubs instead of a live client.
pub trait ClickUpApi: Send + Sync + 'static {
    fn auth(&self) -> &dyn AuthApi;
    fn tasks(&self) -> &dyn TasksApi;
    fn lists(&self) -> &dyn ListsApi;
    fn folders(&self) -> &dyn FoldersApi;
    fn spaces(&self) -> &dyn SpacesApi;
    fn docs(&self) -> &dyn DocsApi;
    fn comments(&self) -> &dyn CommentsApi;
    fn checklists(&self) -> &dyn ChecklistsApi;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn authorized_user(&self) -> ApiResult<Value>;
    /// Returns the `teams` array of `GET /v2/team`.
    async fn workspaces(&self) -> ApiResult<Value>;
    async fn workspace_seats(&self, workspace_id: &str) -> ApiResult<Value>;
}

#[async_trait]
pub trait TasksApi: Send + Sync {
    async fn tasks_in_list(&self, list_id: &str, query: &Map<String, Value>)
    -> ApiResult<TaskPage>;
    async fn tasks_in_folder(
        &self,
        folder_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<TaskPage>;
    async fn tasks_in_space(
        &self,
        space_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<TaskPage>;
    async fn task(&self, task_id: &str, include_subtasks: bool) -> ApiResult<Task>;
    async fn create_task(&self, list_id: &str, body: &Map<String, Value>) -> ApiResult<Value>;
    async fn update_task(&self, task_id: &str, body: &Map<String, Value>) -> ApiResult<Value>;
    async fn delete_task(&self, task_id: &str) -> ApiResult<Value>;
}

#[async_trait]
pub trait ListsApi: Send + Sync {
    async fn lists_in_folder(&self, folder_id: &str) -> ApiResult<Value>;
    async fn folderless_lists(&self, space_id: &str) -> ApiResult<Value>;
    async fn create_list(&self, folder_id: &str, body: &Map<String, Value>) -> ApiResult<Value>;
    async fn create_folderless_list(
        &self,
        space_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn list(&self, list_id: &str) -> ApiResult<Value>;
    async fn update_list(&self, list_id: &str, body: &Map<String, Value>) -> ApiResult<Value>;
    async fn delete_list(&self, list_id: &str) -> ApiResult<Value>;
    async fn add_task_to_list(&self, list_id: &str, task_id: &str) -> ApiResult<Value>;
    async fn remove_task_from_list(&self, list_id: &str, task_id: &str) -> ApiResult<Value>;
    async fn create_from_template_in_folder(
        &self,
        folder_id: &str,
        template_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn create_from_template_in_space(
        &self,
        space_id: &str,
        template_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
}

#[async_trait]
pub trait FoldersApi: Send + Sync {
    async fn folders_in_space(&self, space_id: &str) -> ApiResult<Value>;
    async fn folder(&self, folder_id: &str) -> ApiResult<Value>;
    async fn create_folder(&self, space_id: &str, body: &Map<String, Value>) -> ApiResult<Value>;
    async fn update_folder(&self, folder_id: &str, body: &Map<String, Value>) -> ApiResult<Value>;
    async fn delete_folder(&self, folder_id: &str) -> ApiResult<Value>;
}

#[async_trait]
pub trait SpacesApi: Send + Sync {
    /// Returns the `spaces` array of `GET /v2/team/{id}/space`.
    async fn spaces(&self, workspace_id: &str) -> ApiResult<Value>;
    async fn space(&self, space_id: &str) -> ApiResult<Value>;
}

#[async_trait]
pub trait DocsApi: Send + Sync {
    async fn docs_in_workspace(
        &self,
        workspace_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value>;
    /// Fetches the full page tree (`max_page_depth=-1`).
    async fn doc_pages(
        &self,
        workspace_id: &str,
        doc_id: &str,
        content_format: &str,
    ) -> ApiResult<Vec<Page>>;
    async fn search(
        &self,
        workspace_id: &str,
        query: &str,
        cursor: Option<&str>,
    ) -> ApiResult<Value>;
    async fn create_doc_in_list(&self, list_id: &str, body: &Map<String, Value>)
    -> ApiResult<Value>;
    async fn create_doc_in_folder(
        &self,
        folder_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn update_doc(&self, doc_id: &str, body: &Map<String, Value>) -> ApiResult<Value>;
}

#[async_trait]
pub trait CommentsApi: Send + Sync {
    async fn task_comments(&self, task_id: &str, query: &Map<String, Value>) -> ApiResult<Value>;
    async fn create_task_comment(
        &self,
        task_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn chat_view_comments(
        &self,
        view_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn create_chat_view_comment(
        &self,
        view_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn list_comments(&self, list_id: &str, query: &Map<String, Value>) -> ApiResult<Value>;
    async fn create_list_comment(
        &self,
        list_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn update_comment(&self, comment_id: &str, body: &Map<String, Value>)
    -> ApiResult<Value>;
    async fn delete_comment(&self, comment_id: &str) -> ApiResult<Value>;
    async fn threaded_comments(
        &self,
        comment_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn create_threaded_comment(
        &self,
        comment_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
}

#[async_trait]
pub trait ChecklistsApi: Send + Sync {
    async fn create_checklist(&self, task_id: &str, body: &Map<String, Value>)
    -> ApiResult<Value>;
    async fn update_checklist(
        &self,
        checklist_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn delete_checklist(&self, checklist_id: &str) -> ApiResult<Value>;
    async fn create_checklist_item(
        &self,
        checklist_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn update_checklist_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value>;
    async fn delete_checklist_item(&self, checklist_id: &str, item_id: &str) -> ApiResult<Value>;
}
