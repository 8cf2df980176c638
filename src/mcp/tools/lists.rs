//! MCP tools for list management.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::clickup::ClickUpApi;
use crate::mcp::registry::tool_spec;
use crate::mcp::tools::{ToolId, api_failure, body_without, invalid_container, json_text};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetListsParams {
    #[schemars(description = "Container kind to read lists from: 'folder' or 'space'")]
    pub container_type: String,
    #[schemars(description = "ID of the folder or space")]
    pub container_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetFolderlessListsParams {
    #[schemars(description = "Space ID")]
    pub space_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "Container kind to create the list in: 'folder' or 'space'")]
    pub container_type: String,
    #[schemars(description = "ID of the folder or space")]
    pub container_id: String,
    #[schemars(description = "List name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateFolderlessListParams {
    #[schemars(description = "Space ID to create the list in")]
    pub space_id: String,
    #[schemars(description = "List name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetListParams {
    #[schemars(description = "List ID")]
    pub list_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateListParams {
    #[schemars(description = "List ID to update")]
    pub list_id: String,
    #[schemars(description = "New list name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteListParams {
    #[schemars(description = "List ID to delete")]
    pub list_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskInListParams {
    #[schemars(description = "List ID")]
    pub list_id: String,
    #[schemars(description = "Task ID")]
    pub task_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListFromTemplateInFolderParams {
    #[schemars(description = "Folder ID to create the list in")]
    pub folder_id: String,
    #[schemars(description = "List template ID")]
    pub template_id: String,
    #[schemars(description = "Name of the new list")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListFromTemplateInSpaceParams {
    #[schemars(description = "Space ID to create the list in")]
    pub space_id: String,
    #[schemars(description = "List template ID")]
    pub template_id: String,
    #[schemars(description = "Name of the new list")]
    pub name: String,
}

pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    vec![
        (
            tool_spec::<GetListsParams>("get_lists", "Get lists in a folder or space"),
            ToolId::GetLists,
        ),
        (
            tool_spec::<GetFolderlessListsParams>(
                "get_folderless_lists",
                "Get lists of a space that are not in any folder",
            ),
            ToolId::GetFolderlessLists,
        ),
        (
            tool_spec::<CreateListParams>("create_list", "Create a list in a folder or space"),
            ToolId::CreateList,
        ),
        (
            tool_spec::<CreateFolderlessListParams>(
                "create_folderless_list",
                "Create a list directly in a space, outside any folder",
            ),
            ToolId::CreateFolderlessList,
        ),
        (
            tool_spec::<GetListParams>("get_list", "Get details of a single list"),
            ToolId::GetList,
        ),
        (
            tool_spec::<UpdateListParams>("update_list", "Rename an existing list"),
            ToolId::UpdateList,
        ),
        (
            tool_spec::<DeleteListParams>("delete_list", "Delete a list"),
            ToolId::DeleteList,
        ),
        (
            tool_spec::<TaskInListParams>(
                "add_task_to_list",
                "Add an existing task to an additional list",
            ),
            ToolId::AddTaskToList,
        ),
        (
            tool_spec::<TaskInListParams>(
                "remove_task_from_list",
                "Remove a task from a list it was added to",
            ),
            ToolId::RemoveTaskFromList,
        ),
        (
            tool_spec::<CreateListFromTemplateInFolderParams>(
                "create_list_from_template_in_folder",
                "Create a list in a folder from a list template",
            ),
            ToolId::CreateListFromTemplateInFolder,
        ),
        (
            tool_spec::<CreateListFromTemplateInSpaceParams>(
                "create_list_from_template_in_space",
                "Create a list in a space from a list template",
            ),
            ToolId::CreateListFromTemplateInSpace,
        ),
    ]
}

pub struct ListTools<A: ClickUpApi> {
    api: Arc<A>,
}

impl<A: ClickUpApi> ListTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn get_lists(
        &self,
        Parameters(params): Parameters<GetListsParams>,
    ) -> Result<CallToolResult, McpError> {
        let lists = self.api.lists();
        let result = match params.container_type.as_str() {
            "folder" => lists.lists_in_folder(&params.container_id).await,
            "space" => lists.folderless_lists(&params.container_id).await,
            other => return Ok(invalid_container(other, "folder, space")),
        };
        match result {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("getting lists", &e)),
        }
    }

    pub async fn get_folderless_lists(
        &self,
        Parameters(params): Parameters<GetFolderlessListsParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.lists().folderless_lists(&params.space_id).await {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("getting folderless lists", &e)),
        }
    }

    pub async fn create_list(
        &self,
        Parameters(params): Parameters<CreateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["container_type", "container_id"])?;
        let lists = self.api.lists();
        let result = match params.container_type.as_str() {
            "folder" => lists.create_list(&params.container_id, &body).await,
            "space" => lists.create_folderless_list(&params.container_id, &body).await,
            other => return Ok(invalid_container(other, "folder, space")),
        };
        match result {
            Ok(list) => json_text(&list),
            Err(e) => Ok(api_failure("creating list", &e)),
        }
    }

    pub async fn create_folderless_list(
        &self,
        Parameters(params): Parameters<CreateFolderlessListParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["space_id"])?;
        match self
            .api
            .lists()
            .create_folderless_list(&params.space_id, &body)
            .await
        {
            Ok(list) => json_text(&list),
            Err(e) => Ok(api_failure("creating folderless list", &e)),
        }
    }

    pub async fn get_list(
        &self,
        Parameters(params): Parameters<GetListParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.lists().list(&params.list_id).await {
            Ok(list) => json_text(&list),
            Err(e) => Ok(api_failure("getting list", &e)),
        }
    }

    pub async fn update_list(
        &self,
        Parameters(params): Parameters<UpdateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["list_id"])?;
        match self.api.lists().update_list(&params.list_id, &body).await {
            Ok(list) => json_text(&list),
            Err(e) => Ok(api_failure("updating list", &e)),
        }
    }

    pub async fn delete_list(
        &self,
        Parameters(params): Parameters<DeleteListParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.lists().delete_list(&params.list_id).await {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("deleting list", &e)),
        }
    }

    pub async fn add_task_to_list(
        &self,
        Parameters(params): Parameters<TaskInListParams>,
    ) -> Result<CallToolResult, McpError> {
        match self
            .api
            .lists()
            .add_task_to_list(&params.list_id, &params.task_id)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("adding task to list", &e)),
        }
    }

    pub async fn remove_task_from_list(
        &self,
        Parameters(params): Parameters<TaskInListParams>,
    ) -> Result<CallToolResult, McpError> {
        match self
            .api
            .lists()
            .remove_task_from_list(&params.list_id, &params.task_id)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("removing task from list", &e)),
        }
    }

    pub async fn create_list_from_template_in_folder(
        &self,
        Parameters(params): Parameters<CreateListFromTemplateInFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["folder_id", "template_id"])?;
        match self
            .api
            .lists()
            .create_from_template_in_folder(&params.folder_id, &params.template_id, &body)
            .await
        {
            Ok(list) => json_text(&list),
            Err(e) => Ok(api_failure("creating list from template", &e)),
        }
    }

    pub async fn create_list_from_template_in_space(
        &self,
        Parameters(params): Parameters<CreateListFromTemplateInSpaceParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["space_id", "template_id"])?;
        match self
            .api
            .lists()
            .create_from_template_in_space(&params.space_id, &params.template_id, &body)
            .await
        {
            Ok(list) => json_text(&list),
            Err(e) => Ok(api_failure("creating list from template", &e)),
        }
    }
}
