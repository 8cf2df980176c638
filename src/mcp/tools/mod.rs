//! MCP tool implementations
//!
//! One module per ClickUp category. Each tool struct is generic over
//! `A: ClickUpApi` so tests inject stub bindings instead of a live
//! client.

pub mod checklists;
pub mod comments;
pub mod docs;
pub mod folders;
pub mod lists;
pub mod spaces;
pub mod tasks;
pub mod workspaces;

#[cfg(test)]
mod docs_test;
#[cfg(test)]
mod lists_test;

pub use checklists::ChecklistTools;
pub use comments::CommentTools;
pub use docs::DocTools;
pub use folders::FolderTools;
pub use lists::ListTools;
pub use spaces::SpaceTools;
pub use tasks::TaskTools;
pub use workspaces::WorkspaceTools;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::clickup::ApiError;

/// Dispatch target for a registered tool name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolId {
    GetWorkspaces,
    GetWorkspaceSeats,
    GetAuthorizedUser,
    GetTasks,
    GetTaskDetails,
    GetSubtasks,
    CreateTask,
    UpdateTask,
    DeleteTask,
    GetLists,
    GetFolderlessLists,
    CreateList,
    CreateFolderlessList,
    GetList,
    UpdateList,
    DeleteList,
    AddTaskToList,
    RemoveTaskFromList,
    CreateListFromTemplateInFolder,
    CreateListFromTemplateInSpace,
    GetFolders,
    CreateFolder,
    UpdateFolder,
    DeleteFolder,
    GetSpaces,
    GetSpace,
    GetDocContent,
    SearchDocs,
    GetDocsFromWorkspace,
    GetDocPages,
    CreateDoc,
    UpdateDoc,
    CreateChecklist,
    UpdateChecklist,
    DeleteChecklist,
    CreateChecklistItem,
    UpdateChecklistItem,
    DeleteChecklistItem,
    GetTaskComments,
    CreateTaskComment,
    GetChatViewComments,
    CreateChatViewComment,
    GetListComments,
    CreateListComment,
    UpdateComment,
    DeleteComment,
    GetThreadedComments,
    CreateThreadedComment,
}

/// Pretty-prints a payload into the single text content of a success
/// result.
pub(crate) fn json_text<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Error envelope for a failed backend call, e.g.
/// `Error getting tasks: ClickUp API error (404): Team not authorized`.
pub(crate) fn api_failure(doing: &str, err: &ApiError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error {doing}: {err}"))])
}

pub(crate) fn invalid_container(value: &str, allowed: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!(
        "Invalid container_type: {value}. Must be one of: {allowed}"
    ))])
}

/// Serializes a parameter struct and strips the path-identifying keys,
/// leaving the body (or query object) to forward upstream.
pub(crate) fn body_without<T: Serialize>(
    params: &T,
    drop: &[&str],
) -> Result<Map<String, Value>, McpError> {
    let mut map = match serde_json::to_value(params) {
        Ok(Value::Object(map)) => map,
        Ok(_) => Map::new(),
        Err(e) => return Err(McpError::internal_error(e.to_string(), None)),
    };
    for key in drop {
        map.remove(*key);
    }
    Ok(map)
}
