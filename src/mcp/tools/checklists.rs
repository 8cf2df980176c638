//! MCP tools for task checklists.

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
pub struct CreateChecklistParams {
    #[schemars(description = "Task ID to attach the checklist to")]
    pub task_id: String,
    #[schemars(description = "Checklist name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateChecklistParams {
    #[schemars(description = "Checklist ID to update")]
    pub checklist_id: String,
    #[schemars(description = "New checklist name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteChecklistParams {
    #[schemars(description = "Checklist ID to delete")]
    pub checklist_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateChecklistItemParams {
    #[schemars(description = "Checklist ID to add the item to")]
    pub checklist_id: String,
    #[schemars(description = "Item name")]
    pub name: String,
    #[schemars(description = "User ID to assign the item to")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[schemars(description = "Whether the item starts resolved")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateChecklistItemParams {
    #[schemars(description = "Checklist ID the item belongs to")]
    pub checklist_id: String,
    #[schemars(description = "Checklist item ID to update")]
    pub checklist_item_id: String,
    #[schemars(description = "New item name")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[schemars(description = "User ID to assign the item to")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[schemars(description = "New resolved state")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteChecklistItemParams {
    #[schemars(description = "Checklist ID the item belongs to")]
    pub checklist_id: String,
    #[schemars(description = "Checklist item ID to delete")]
    pub checklist_item_id: String,
}

pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    vec![
        (
            tool_spec::<CreateChecklistParams>("create_checklist", "Create a checklist on a task"),
            ToolId::CreateChecklist,
        ),
        (
            tool_spec::<UpdateChecklistParams>("update_checklist", "Rename a checklist"),
            ToolId::UpdateChecklist,
        ),
        (
            tool_spec::<DeleteChecklistParams>("delete_checklist", "Delete a checklist"),
            ToolId::DeleteChecklist,
        ),
        (
            tool_spec::<CreateChecklistItemParams>(
                "create_checklist_item",
                "Add an item to a checklist",
            ),
            ToolId::CreateChecklistItem,
        ),
        (
            tool_spec::<UpdateChecklistItemParams>(
                "update_checklist_item",
                "Update an item of a checklist",
            ),
            ToolId::UpdateChecklistItem,
        ),
        (
            tool_spec::<DeleteChecklistItemParams>(
                "delete_checklist_item",
                "Delete an item from a checklist",
            ),
            ToolId::DeleteChecklistItem,
        ),
    ]
}

pub struct ChecklistTools<A: ClickUpApi> {
    api: Arc<A>,
}

impl<A: ClickUpApi> ChecklistTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn create_checklist(
        &self,
        Parameters(params): Parameters<CreateChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["task_id"])?;
        match self
            .api
            .checklists()
            .create_checklist(&params.task_id, &body)
            .await
        {
            Ok(checklist) => json_text(&checklist),
            Err(e) => Ok(api_failure("creating checklist", &e)),
        }
    }

    pub async fn update_checklist(
        &self,
        Parameters(params): Parameters<UpdateChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["checklist_id"])?;
        match self
            .api
            .checklists()
            .update_checklist(&params.checklist_id, &body)
            .await
        {
            Ok(checklist) => json_text(&checklist),
            Err(e) => Ok(api_failure("updating checklist", &e)),
        }
    }

    pub async fn delete_checklist(
        &self,
        Parameters(params): Parameters<DeleteChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        match self
            .api
            .checklists()
            .delete_checklist(&params.checklist_id)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("deleting checklist", &e)),
        }
    }

    pub async fn create_checklist_item(
        &self,
        Parameters(params): Parameters<CreateChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["checklist_id"])?;
        match self
            .api
            .checklists()
            .create_checklist_item(&params.checklist_id, &body)
            .await
        {
            Ok(item) => json_text(&item),
            Err(e) => Ok(api_failure("creating checklist item", &e)),
        }
    }

    pub async fn update_checklist_item(
        &self,
        Parameters(params): Parameters<UpdateChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["checklist_id", "checklist_item_id"])?;
        match self
            .api
            .checklists()
            .update_checklist_item(&params.checklist_id, &params.checklist_item_id, &body)
            .await
        {
            Ok(item) => json_text(&item),
            Err(e) => Ok(api_failure("updating checklist item", &e)),
        }
    }

    pub async fn delete_checklist_item(
        &self,
        Parameters(params): Parameters<DeleteChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        match self
            .api
            .checklists()
            .delete_checklist_item(&params.checklist_id, &params.checklist_item_id)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("deleting checklist item", &e)),
        }
    }
}
