//! Canned ClickUp bindings for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Map, Value, json};

use crate::clickup::api::{
    AuthApi, ChecklistsApi, ClickUpApi, CommentsApi, DocsApi, FoldersApi, ListsApi, SpacesApi,
    TasksApi,
};
use crate::clickup::models::{Page, Task, TaskPage};
use crate::clickup::{ApiError, ApiResult};

/// Extracts the single text content of a tool result.
pub(crate) fn content_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

/// A [`ClickUpApi`] whose responses come from canned fields. Every
/// method records its invocation in `calls`, and anything left
/// unstubbed answers with a 500.
#[derive(Default)]
pub(crate) struct StubApi {
    pub teams: Option<Value>,
    pub task: Option<Task>,
    pub task_error: Option<(u16, String)>,
    pub task_page: Option<TaskPage>,
    pub task_page_error: Option<(u16, String)>,
    pub doc_pages: Option<Vec<Page>>,
    pub docs: Option<Value>,
    pub task_comments: Option<Value>,
    pub folder_lists: Option<Value>,
    pub space_lists: Option<Value>,
    /// Fallback body for reads without a dedicated field above.
    pub payload: Option<Value>,
    pub calls: Mutex<Vec<String>>,
}

impl StubApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail<T>(&self) -> ApiResult<T> {
        Err(ApiError::Api {
            status: 500,
            message: "not stubbed".to_string(),
        })
    }
}

fn canned(error: &Option<(u16, String)>) -> Option<ApiError> {
    error.as_ref().map(|(status, message)| ApiError::Api {
        status: *status,
        message: message.clone(),
    })
}

fn render(query: &Map<String, Value>) -> String {
    Value::Object(query.clone()).to_string()
}

impl ClickUpApi for StubApi {
    fn auth(&self) -> &dyn AuthApi {
        self
    }
    fn tasks(&self) -> &dyn TasksApi {
        self
    }
    fn lists(&self) -> &dyn ListsApi {
        self
    }
    fn folders(&self) -> &dyn FoldersApi {
        self
    }
    fn spaces(&self) -> &dyn SpacesApi {
        self
    }
    fn docs(&self) -> &dyn DocsApi {
        self
    }
    fn comments(&self) -> &dyn CommentsApi {
        self
    }
    fn checklists(&self) -> &dyn ChecklistsApi {
        self
    }
}

#[async_trait]
impl AuthApi for StubApi {
    async fn authorized_user(&self) -> ApiResult<Value> {
        self.record("authorized_user".to_string());
        self.fail()
    }

    async fn workspaces(&self) -> ApiResult<Value> {
        self.record("workspaces".to_string());
        self.teams.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn workspace_seats(&self, workspace_id: &str) -> ApiResult<Value> {
        self.record(format!("workspace_seats:{workspace_id}"));
        self.fail()
    }
}

#[async_trait]
impl TasksApi for StubApi {
    async fn tasks_in_list(
        &self,
        list_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<TaskPage> {
        self.record(format!("tasks_in_list:{list_id}:{}", render(query)));
        if let Some(e) = canned(&self.task_page_error) {
            return Err(e);
        }
        self.task_page.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn tasks_in_folder(
        &self,
        folder_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<TaskPage> {
        self.record(format!("tasks_in_folder:{folder_id}:{}", render(query)));
        self.task_page.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn tasks_in_space(
        &self,
        space_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<TaskPage> {
        self.record(format!("tasks_in_space:{space_id}:{}", render(query)));
        self.task_page.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn task(&self, task_id: &str, include_subtasks: bool) -> ApiResult<Task> {
        self.record(format!("task:{task_id}:{include_subtasks}"));
        if let Some(e) = canned(&self.task_error) {
            return Err(e);
        }
        self.task.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn create_task(&self, list_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("create_task:{list_id}"));
        // Echo the request so tests can see exactly what was sent.
        let mut echo = Map::new();
        echo.insert("list_id".to_string(), json!(list_id));
        for (key, value) in body {
            echo.insert(key.clone(), value.clone());
        }
        Ok(Value::Object(echo))
    }

    async fn update_task(&self, task_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("update_task:{task_id}:{}", render(body)));
        self.fail()
    }

    async fn delete_task(&self, task_id: &str) -> ApiResult<Value> {
        self.record(format!("delete_task:{task_id}"));
        self.fail()
    }
}

#[async_trait]
impl ListsApi for StubApi {
    async fn lists_in_folder(&self, folder_id: &str) -> ApiResult<Value> {
        self.record(format!("lists_in_folder:{folder_id}"));
        self.folder_lists.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn folderless_lists(&self, space_id: &str) -> ApiResult<Value> {
        self.record(format!("folderless_lists:{space_id}"));
        self.space_lists.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn create_list(&self, folder_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("create_list:{folder_id}:{}", render(body)));
        Ok(Value::Object(body.clone()))
    }

    async fn create_folderless_list(
        &self,
        space_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("create_folderless_list:{space_id}:{}", render(body)));
        Ok(Value::Object(body.clone()))
    }

    async fn list(&self, list_id: &str) -> ApiResult<Value> {
        self.record(format!("list:{list_id}"));
        self.payload.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn update_list(&self, list_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("update_list:{list_id}:{}", render(body)));
        self.fail()
    }

    async fn delete_list(&self, list_id: &str) -> ApiResult<Value> {
        self.record(format!("delete_list:{list_id}"));
        self.fail()
    }

    async fn add_task_to_list(&self, list_id: &str, task_id: &str) -> ApiResult<Value> {
        self.record(format!("add_task_to_list:{list_id}:{task_id}"));
        self.fail()
    }

    async fn remove_task_from_list(&self, list_id: &str, task_id: &str) -> ApiResult<Value> {
        self.record(format!("remove_task_from_list:{list_id}:{task_id}"));
        self.fail()
    }

    async fn create_from_template_in_folder(
        &self,
        folder_id: &str,
        template_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!(
            "create_from_template_in_folder:{folder_id}:{template_id}:{}",
            render(body)
        ));
        self.fail()
    }

    async fn create_from_template_in_space(
        &self,
        space_id: &str,
        template_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!(
            "create_from_template_in_space:{space_id}:{template_id}:{}",
            render(body)
        ));
        self.fail()
    }
}

#[async_trait]
impl FoldersApi for StubApi {
    async fn folders_in_space(&self, space_id: &str) -> ApiResult<Value> {
        self.record(format!("folders_in_space:{space_id}"));
        self.payload.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn folder(&self, folder_id: &str) -> ApiResult<Value> {
        self.record(format!("folder:{folder_id}"));
        self.payload.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn create_folder(&self, space_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("create_folder:{space_id}:{}", render(body)));
        self.fail()
    }

    async fn update_folder(&self, folder_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("update_folder:{folder_id}:{}", render(body)));
        self.fail()
    }

    async fn delete_folder(&self, folder_id: &str) -> ApiResult<Value> {
        self.record(format!("delete_folder:{folder_id}"));
        self.fail()
    }
}

#[async_trait]
impl SpacesApi for StubApi {
    async fn spaces(&self, workspace_id: &str) -> ApiResult<Value> {
        self.record(format!("spaces:{workspace_id}"));
        self.payload.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn space(&self, space_id: &str) -> ApiResult<Value> {
        self.record(format!("space:{space_id}"));
        self.payload.clone().map(Ok).unwrap_or_else(|| self.fail())
    }
}

#[async_trait]
impl DocsApi for StubApi {
    async fn docs_in_workspace(
        &self,
        workspace_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("docs_in_workspace:{workspace_id}:{}", render(query)));
        self.docs.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn doc_pages(
        &self,
        workspace_id: &str,
        doc_id: &str,
        content_format: &str,
    ) -> ApiResult<Vec<Page>> {
        self.record(format!("doc_pages:{workspace_id}:{doc_id}:{content_format}"));
        self.doc_pages.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn search(
        &self,
        workspace_id: &str,
        query: &str,
        cursor: Option<&str>,
    ) -> ApiResult<Value> {
        self.record(format!(
            "search:{workspace_id}:{query}:{}",
            cursor.unwrap_or("-")
        ));
        self.fail()
    }

    async fn create_doc_in_list(
        &self,
        list_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("create_doc_in_list:{list_id}:{}", render(body)));
        Ok(Value::Object(body.clone()))
    }

    async fn create_doc_in_folder(
        &self,
        folder_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("create_doc_in_folder:{folder_id}:{}", render(body)));
        Ok(Value::Object(body.clone()))
    }

    async fn update_doc(&self, doc_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("update_doc:{doc_id}:{}", render(body)));
        self.fail()
    }
}

#[async_trait]
impl CommentsApi for StubApi {
    async fn task_comments(&self, task_id: &str, query: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("task_comments:{task_id}:{}", render(query)));
        self.task_comments.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn create_task_comment(
        &self,
        task_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("create_task_comment:{task_id}:{}", render(body)));
        self.fail()
    }

    async fn chat_view_comments(
        &self,
        view_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("chat_view_comments:{view_id}:{}", render(query)));
        self.payload.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn create_chat_view_comment(
        &self,
        view_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("create_chat_view_comment:{view_id}:{}", render(body)));
        self.fail()
    }

    async fn list_comments(&self, list_id: &str, query: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("list_comments:{list_id}:{}", render(query)));
        self.payload.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn create_list_comment(
        &self,
        list_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("create_list_comment:{list_id}:{}", render(body)));
        self.fail()
    }

    async fn update_comment(&self, comment_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("update_comment:{comment_id}:{}", render(body)));
        self.fail()
    }

    async fn delete_comment(&self, comment_id: &str) -> ApiResult<Value> {
        self.record(format!("delete_comment:{comment_id}"));
        self.fail()
    }

    async fn threaded_comments(
        &self,
        comment_id: &str,
        query: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("threaded_comments:{comment_id}:{}", render(query)));
        self.payload.clone().map(Ok).unwrap_or_else(|| self.fail())
    }

    async fn create_threaded_comment(
        &self,
        comment_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!(
            "create_threaded_comment:{comment_id}:{}",
            render(body)
        ));
        self.fail()
    }
}

#[async_trait]
impl ChecklistsApi for StubApi {
    async fn create_checklist(&self, task_id: &str, body: &Map<String, Value>) -> ApiResult<Value> {
        self.record(format!("create_checklist:{task_id}:{}", render(body)));
        self.fail()
    }

    async fn update_checklist(
        &self,
        checklist_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!("update_checklist:{checklist_id}:{}", render(body)));
        self.fail()
    }

    async fn delete_checklist(&self, checklist_id: &str) -> ApiResult<Value> {
        self.record(format!("delete_checklist:{checklist_id}"));
        self.fail()
    }

    async fn create_checklist_item(
        &self,
        checklist_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!(
            "create_checklist_item:{checklist_id}:{}",
            render(body)
        ));
        self.fail()
    }

    async fn update_checklist_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        body: &Map<String, Value>,
    ) -> ApiResult<Value> {
        self.record(format!(
            "update_checklist_item:{checklist_id}:{item_id}:{}",
            render(body)
        ));
        self.fail()
    }

    async fn delete_checklist_item(&self, checklist_id: &str, item_id: &str) -> ApiResult<Value> {
        self.record(format!("delete_checklist_item:{checklist_id}:{item_id}"));
        self.fail()
    }
}
