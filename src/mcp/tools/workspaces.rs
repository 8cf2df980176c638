//! MCP tools for workspace and account information.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::clickup::ClickUpApi;
use crate::mcp::registry::tool_spec;
use crate::mcp::tools::{ToolId, api_failure, json_text};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetWorkspacesParams {}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetWorkspaceSeatsParams {
    #[schemars(description = "Workspace (team) ID")]
    pub workspace_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetAuthorizedUserParams {}

pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    vec![
        (
            tool_spec::<GetWorkspacesParams>(
                "get_workspaces",
                "Get all workspaces the authorized user belongs to",
            ),
            ToolId::GetWorkspaces,
        ),
        (
            tool_spec::<GetWorkspaceSeatsParams>(
                "get_workspace_seats",
                "Get used, total and available member and guest seats for a workspace",
            ),
            ToolId::GetWorkspaceSeats,
        ),
        (
            tool_spec::<GetAuthorizedUserParams>(
                "get_authorized_user",
                "Get details of the user the API token belongs to",
            ),
            ToolId::GetAuthorizedUser,
        ),
    ]
}

pub struct WorkspaceTools<A: ClickUpApi> {
    api: Arc<A>,
}

impl<A: ClickUpApi> WorkspaceTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn get_workspaces(&self) -> Result<CallToolResult, McpError> {
        match self.api.auth().workspaces().await {
            Ok(teams) => json_text(&teams),
            Err(e) => Ok(api_failure("getting workspaces", &e)),
        }
    }

    pub async fn get_workspace_seats(
        &self,
        Parameters(params): Parameters<GetWorkspaceSeatsParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.auth().workspace_seats(&params.workspace_id).await {
            Ok(seats) => json_text(&seats),
            Err(e) => Ok(api_failure("getting workspace seats", &e)),
        }
    }

    pub async fn get_authorized_user(&self) -> Result<CallToolResult, McpError> {
        match self.api.auth().authorized_user().await {
            Ok(user) => json_text(&user),
            Err(e) => Ok(api_failure("getting authorized user", &e)),
        }
    }
}
