//! MCP tools for folder management.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::clickup::ClickUpApi;
use crate::mcp::registry::tool_spec;
use crate::mcp::tools::{ToolId, api_failure, body_without, json_text};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetFoldersParams {
    #[schemars(description = "Space ID")]
    pub space_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateFolderParams {
    #[schemars(description = "Space ID to create the folder in")]
    pub space_id: String,
    #[schemars(description = "Folder name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateFolderParams {
    #[schemars(description = "Folder ID to update")]
    pub folder_id: String,
    #[schemars(description = "New folder name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteFolderParams {
    #[schemars(description = "Folder ID to delete")]
    pub folder_id: String,
}

pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    vec![
        (
            tool_spec::<GetFoldersParams>("get_folders", "Get all folders in a space"),
            ToolId::GetFolders,
        ),
        (
            tool_spec::<CreateFolderParams>("create_folder", "Create a folder in a space"),
            ToolId::CreateFolder,
        ),
        (
            tool_spec::<UpdateFolderParams>("update_folder", "Rename an existing folder"),
            ToolId::UpdateFolder,
        ),
        (
            tool_spec::<DeleteFolderParams>("delete_folder", "Delete a folder"),
            ToolId::DeleteFolder,
        ),
    ]
}

pub struct FolderTools<A: ClickUpApi> {
    api: Arc<A>,
}

impl<A: ClickUpApi> FolderTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn get_folders(
        &self,
        Parameters(params): Parameters<GetFoldersParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.folders().folders_in_space(&params.space_id).await {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("getting folders", &e)),
        }
    }

    pub async fn create_folder(
        &self,
        Parameters(params): Parameters<CreateFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["space_id"])?;
        match self
            .api
            .folders()
            .create_folder(&params.space_id, &body)
            .await
        {
            Ok(folder) => json_text(&folder),
            Err(e) => Ok(api_failure("creating folder", &e)),
        }
    }

    pub async fn update_folder(
        &self,
        Parameters(params): Parameters<UpdateFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["folder_id"])?;
        match self
            .api
            .folders()
            .update_folder(&params.folder_id, &body)
            .await
        {
            Ok(folder) => json_text(&folder),
            Err(e) => Ok(api_failure("updating folder", &e)),
        }
    }

    pub async fn delete_folder(
        &self,
        Parameters(params): Parameters<DeleteFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.folders().delete_folder(&params.folder_id).await {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("deleting folder", &e)),
        }
    }
}
