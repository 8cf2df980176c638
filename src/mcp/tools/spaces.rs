//! MCP tools for space management.

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
pub struct GetSpacesParams {
    #[schemars(description = "Workspace (team) ID")]
    pub workspace_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetSpaceParams {
    #[schemars(description = "Space ID")]
    pub space_id: String,
}

pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    vec![
        (
            tool_spec::<GetSpacesParams>("get_spaces", "Get all spaces in a workspace"),
            ToolId::GetSpaces,
        ),
        (
            tool_spec::<GetSpaceParams>("get_space", "Get details of a single space"),
            ToolId::GetSpace,
        ),
    ]
}

pub struct SpaceTools<A: ClickUpApi> {
    api: Arc<A>,
}

impl<A: ClickUpApi> SpaceTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn get_spaces(
        &self,
        Parameters(params): Parameters<GetSpacesParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.spaces().spaces(&params.workspace_id).await {
            Ok(spaces) => json_text(&spaces),
            Err(e) => Ok(api_failure("getting spaces", &e)),
        }
    }

    pub async fn get_space(
        &self,
        Parameters(params): Parameters<GetSpaceParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.spaces().space(&params.space_id).await {
            Ok(space) => json_text(&space),
            Err(e) => Ok(api_failure("getting space", &e)),
        }
    }
}
