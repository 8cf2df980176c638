//! Resource read dispatch.
//!
//! Unlike tool calls, resource failures surface as protocol-level
//! errors; MCP has no error-content channel for resource reads.

use rmcp::ErrorData as McpError;
use rmcp::model::{ReadResourceResult, ResourceContents};
use serde::Serialize;
use serde_json::{Map, json};

use crate::clickup::{ApiError, ClickUpApi};
use crate::mcp::resources::{ResourceRoute, ResourceRouter};
use crate::mcp::tools::docs::combined_page_content;

pub(crate) async fn read_resource<A: ClickUpApi>(
    api: &A,
    router: &ResourceRouter,
    uri: &str,
) -> Result<ReadResourceResult, McpError> {
    let matched = router.route(uri).ok_or_else(|| {
        McpError::resource_not_found(
            format!("Unknown resource: {uri}"),
            Some(json!({ "uri": uri })),
        )
    })?;

    let text = match matched.route {
        ResourceRoute::Task { task_id } => {
            pretty(&api.tasks().task(&task_id, false).await.map_err(backend)?)?
        }
        ResourceRoute::TaskComments { task_id } => pretty(
            &api.comments()
                .task_comments(&task_id, &Map::new())
                .await
                .map_err(backend)?,
        )?,
        ResourceRoute::ViewComments { view_id } => pretty(
            &api.comments()
                .chat_view_comments(&view_id, &Map::new())
                .await
                .map_err(backend)?,
        )?,
        ResourceRoute::ListComments { list_id } => pretty(
            &api.comments()
                .list_comments(&list_id, &Map::new())
                .await
                .map_err(backend)?,
        )?,
        ResourceRoute::ThreadedComments { comment_id } => pretty(
            &api.comments()
                .threaded_comments(&comment_id, &Map::new())
                .await
                .map_err(backend)?,
        )?,
        // The upstream API has no checklist read endpoints; these two
        // return the identifying fields with empty collections.
        ResourceRoute::TaskChecklists { task_id } => {
            let task = api.tasks().task(&task_id, false).await.map_err(backend)?;
            pretty(&json!({
                "task_id": task_id,
                "task_name": task.name,
                "checklists": [],
            }))?
        }
        ResourceRoute::ChecklistItems { checklist_id } => pretty(&json!({
            "checklist_id": checklist_id,
            "items": [],
        }))?,
        ResourceRoute::DocContent {
            workspace_id,
            doc_id,
        } => {
            let pages = api
                .docs()
                .doc_pages(&workspace_id, &doc_id, "text/md")
                .await
                .map_err(backend)?;
            combined_page_content(&pages)
        }
        ResourceRoute::WorkspaceSpaces { workspace_id } => {
            pretty(&api.spaces().spaces(&workspace_id).await.map_err(backend)?)?
        }
        ResourceRoute::Space { space_id } => {
            pretty(&api.spaces().space(&space_id).await.map_err(backend)?)?
        }
        ResourceRoute::SpaceFolders { space_id } => pretty(
            &api.folders()
                .folders_in_space(&space_id)
                .await
                .map_err(backend)?,
        )?,
        ResourceRoute::Folder { folder_id } => {
            pretty(&api.folders().folder(&folder_id).await.map_err(backend)?)?
        }
        ResourceRoute::FolderLists { folder_id } => pretty(
            &api.lists()
                .lists_in_folder(&folder_id)
                .await
                .map_err(backend)?,
        )?,
        ResourceRoute::SpaceLists { space_id } => pretty(
            &api.lists()
                .folderless_lists(&space_id)
                .await
                .map_err(backend)?,
        )?,
        ResourceRoute::List { list_id } => {
            pretty(&api.lists().list(&list_id).await.map_err(backend)?)?
        }
    };

    Ok(ReadResourceResult {
        contents: vec![text_contents(text, uri, matched.mime_type)],
    })
}

/// The response echoes the request URI and carries the template's mime
/// type.
fn text_contents(text: String, uri: &str, mime_type: &str) -> ResourceContents {
    let mut contents = ResourceContents::text(text, uri);
    if let ResourceContents::TextResourceContents { mime_type: m, .. } = &mut contents {
        *m = Some(mime_type.to_string());
    }
    contents
}

fn pretty<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

fn backend(e: ApiError) -> McpError {
    McpError::internal_error(e.to_string(), None)
}
