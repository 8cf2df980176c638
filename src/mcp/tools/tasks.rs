//! MCP tools for task management.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::clickup::ClickUpApi;
use crate::clickup::models::Task;
use crate::mcp::registry::tool_spec;
use crate::mcp::tools::{ToolId, api_failure, body_without, invalid_container, json_text};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    #[schemars(description = "Container kind to read tasks from: 'list', 'folder' or 'space'")]
    pub container_type: String,
    #[schemars(description = "ID of the list, folder or space")]
    pub container_id: String,
    #[schemars(description = "Include closed tasks")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_closed: Option<bool>,
    #[schemars(description = "Include subtasks")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<bool>,
    #[schemars(description = "Page to fetch (starts at 0)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[schemars(description = "Order by: 'id', 'created', 'updated' or 'due_date'")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[schemars(description = "Reverse the sort order")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskDetailsParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
    #[schemars(description = "Include subtasks in the response")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_subtasks: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetSubtasksParams {
    #[schemars(description = "ID of the parent task")]
    pub task_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "ID of the list to create the task in")]
    pub list_id: String,
    #[schemars(description = "Task name")]
    pub name: String,
    #[schemars(description = "Task description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "User IDs to assign")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<i64>>,
    #[schemars(description = "Tag names")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Status name, e.g. 'to do'")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[schemars(description = "Priority: 1 (urgent) to 4 (low)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[schemars(description = "Due date (unix milliseconds)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[schemars(description = "Whether due_date carries a time of day")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    #[schemars(description = "Time estimate in milliseconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,
    #[schemars(description = "Start date (unix milliseconds)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[schemars(description = "Whether start_date carries a time of day")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,
    #[schemars(description = "Notify all assignees")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
    #[schemars(description = "Parent task ID to create this task as a subtask")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID to update")]
    pub task_id: String,
    #[schemars(description = "New task name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schemars(description = "New description")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "User IDs to assign")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<i64>>,
    #[schemars(description = "Status name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[schemars(description = "Priority: 1 (urgent) to 4 (low)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[schemars(description = "Due date (unix milliseconds)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[schemars(description = "Whether due_date carries a time of day")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    #[schemars(description = "Time estimate in milliseconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,
    #[schemars(description = "Start date (unix milliseconds)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[schemars(description = "Whether start_date carries a time of day")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,
    #[schemars(description = "Notify all assignees")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
    #[schemars(description = "New parent task ID")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    #[schemars(description = "Task ID to delete")]
    pub task_id: String,
}

pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    vec![
        (
            tool_spec::<GetTasksParams>(
                "get_tasks",
                "Get tasks from a list, folder or space with optional filters",
            ),
            ToolId::GetTasks,
        ),
        (
            tool_spec::<GetTaskDetailsParams>(
                "get_task_details",
                "Get full details of a single task",
            ),
            ToolId::GetTaskDetails,
        ),
        (
            tool_spec::<GetSubtasksParams>("get_subtasks", "Get the direct subtasks of a task"),
            ToolId::GetSubtasks,
        ),
        (
            tool_spec::<CreateTaskParams>("create_task", "Create a new task in a list"),
            ToolId::CreateTask,
        ),
        (
            tool_spec::<UpdateTaskParams>("update_task", "Update an existing task"),
            ToolId::UpdateTask,
        ),
        (
            tool_spec::<DeleteTaskParams>("delete_task", "Delete a task"),
            ToolId::DeleteTask,
        ),
    ]
}

pub struct TaskTools<A: ClickUpApi> {
    api: Arc<A>,
}

impl<A: ClickUpApi> TaskTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = body_without(&params, &["container_type", "container_id"])?;
        let tasks = self.api.tasks();
        let result = match params.container_type.as_str() {
            "list" => tasks.tasks_in_list(&params.container_id, &query).await,
            "folder" => tasks.tasks_in_folder(&params.container_id, &query).await,
            "space" => tasks.tasks_in_space(&params.container_id, &query).await,
            other => return Ok(invalid_container(other, "list, folder, space")),
        };
        match result {
            Ok(page) => json_text(&page),
            Err(e) => Ok(api_failure("getting tasks", &e)),
        }
    }

    pub async fn get_task_details(
        &self,
        Parameters(params): Parameters<GetTaskDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let include_subtasks = params.include_subtasks.unwrap_or(false);
        match self.api.tasks().task(&params.task_id, include_subtasks).await {
            Ok(task) => json_text(&task),
            Err(e) => Ok(api_failure("getting task details", &e)),
        }
    }

    /// The API has no subtask listing endpoint, so this reads the parent,
    /// lists its list with subtasks included, and filters by `parent`.
    /// When the parent's list cannot be resolved the result is an empty
    /// array rather than an error.
    pub async fn get_subtasks(
        &self,
        Parameters(params): Parameters<GetSubtasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let tasks = self.api.tasks();
        let parent = match tasks.task(&params.task_id, false).await {
            Ok(task) => task,
            Err(e) => return Ok(api_failure("getting subtasks", &e)),
        };
        let subtasks: Vec<Task> = match &parent.list {
            Some(list) => {
                let mut query = Map::new();
                query.insert("subtasks".into(), Value::Bool(true));
                query.insert("include_closed".into(), Value::Bool(true));
                match tasks.tasks_in_list(&list.id, &query).await {
                    Ok(page) => page
                        .tasks
                        .into_iter()
                        .filter(|t| t.parent.as_deref() == Some(params.task_id.as_str()))
                        .collect(),
                    Err(e) => {
                        tracing::warn!(
                            task_id = %params.task_id,
                            list_id = %list.id,
                            error = %e,
                            "failed to list the parent's list, returning no subtasks"
                        );
                        Vec::new()
                    }
                }
            }
            None => {
                tracing::warn!(
                    task_id = %params.task_id,
                    "task carries no list reference, returning no subtasks"
                );
                Vec::new()
            }
        };
        json_text(&subtasks)
    }

    pub async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["list_id"])?;
        match self.api.tasks().create_task(&params.list_id, &body).await {
            Ok(task) => json_text(&task),
            Err(e) => Ok(api_failure("creating task", &e)),
        }
    }

    pub async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["task_id"])?;
        match self.api.tasks().update_task(&params.task_id, &body).await {
            Ok(task) => json_text(&task),
            Err(e) => Ok(api_failure("updating task", &e)),
        }
    }

    pub async fn delete_task(
        &self,
        Parameters(params): Parameters<DeleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.tasks().delete_task(&params.task_id).await {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("deleting task", &e)),
        }
    }
}
