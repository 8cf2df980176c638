//! MCP tools for docs.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::*, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::clickup::ClickUpApi;
use crate::clickup::models::Page;
use crate::mcp::registry::tool_spec;
use crate::mcp::tools::{ToolId, api_failure, body_without, invalid_container, json_text};

/// Shown when a doc has pages but none carry any content.
pub(crate) const NO_DOC_CONTENT: &str = "No content found in this doc.";

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetDocContentParams {
    #[schemars(description = "Doc ID")]
    pub doc_id: String,
    #[schemars(description = "Workspace (team) ID the doc lives in")]
    pub workspace_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchDocsParams {
    #[schemars(description = "Workspace (team) ID to search in")]
    pub workspace_id: String,
    #[schemars(description = "Doc name to search for, or 'space:<space_id>' to search by space")]
    pub query: String,
    #[schemars(description = "Cursor from a previous page of results")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetDocsFromWorkspaceParams {
    #[schemars(description = "Workspace (team) ID")]
    pub workspace_id: String,
    #[schemars(description = "Cursor from a previous page of results")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[schemars(description = "Include deleted docs (default false)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[schemars(description = "Include archived docs (default false)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[schemars(description = "Maximum number of docs to return (default 50)")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetDocPagesParams {
    #[schemars(description = "Doc ID")]
    pub doc_id: String,
    #[schemars(description = "Workspace (team) ID the doc lives in")]
    pub workspace_id: String,
    #[schemars(description = "Content format: 'text/md' (default) or 'text/plain'")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateDocParams {
    #[schemars(description = "Container kind to create the doc in: 'list' or 'folder'")]
    pub container_type: String,
    #[schemars(description = "ID of the list or folder")]
    pub container_id: String,
    #[schemars(description = "Doc title")]
    pub title: String,
    #[schemars(description = "Doc content")]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateDocParams {
    #[schemars(description = "Doc ID to update")]
    pub doc_id: String,
    #[schemars(description = "New doc title")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[schemars(description = "New doc content")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    vec![
        (
            tool_spec::<GetDocContentParams>(
                "get_doc_content",
                "Get the combined text content of every page of a doc",
            ),
            ToolId::GetDocContent,
        ),
        (
            tool_spec::<SearchDocsParams>("search_docs", "Search docs in a workspace by name"),
            ToolId::SearchDocs,
        ),
        (
            tool_spec::<GetDocsFromWorkspaceParams>(
                "get_docs_from_workspace",
                "Get all docs of a workspace",
            ),
            ToolId::GetDocsFromWorkspace,
        ),
        (
            tool_spec::<GetDocPagesParams>("get_doc_pages", "Get the page tree of a doc"),
            ToolId::GetDocPages,
        ),
        (
            tool_spec::<CreateDocParams>("create_doc", "Create a doc in a list or folder"),
            ToolId::CreateDoc,
        ),
        (
            tool_spec::<UpdateDocParams>("update_doc", "Update a doc's title or content"),
            ToolId::UpdateDoc,
        ),
    ]
}

/// Depth-first concatenation of page contents, blank-line separated.
/// Falls back to [`NO_DOC_CONTENT`] when nothing carries text.
pub(crate) fn combined_page_content(pages: &[Page]) -> String {
    let mut parts = Vec::new();
    collect_content(pages, &mut parts);
    if parts.is_empty() {
        NO_DOC_CONTENT.to_string()
    } else {
        parts.join("\n\n")
    }
}

fn collect_content(pages: &[Page], out: &mut Vec<String>) {
    for page in pages {
        if let Some(content) = &page.content {
            if !content.is_empty() {
                out.push(content.clone());
            }
        }
        collect_content(&page.pages, out);
    }
}

pub struct DocTools<A: ClickUpApi> {
    api: Arc<A>,
}

impl<A: ClickUpApi> DocTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn get_doc_content(
        &self,
        Parameters(params): Parameters<GetDocContentParams>,
    ) -> Result<CallToolResult, McpError> {
        match self
            .api
            .docs()
            .doc_pages(&params.workspace_id, &params.doc_id, "text/md")
            .await
        {
            Ok(pages) => Ok(CallToolResult::success(vec![Content::text(
                combined_page_content(&pages),
            )])),
            Err(e) => Ok(api_failure("getting doc content", &e)),
        }
    }

    pub async fn search_docs(
        &self,
        Parameters(params): Parameters<SearchDocsParams>,
    ) -> Result<CallToolResult, McpError> {
        match self
            .api
            .docs()
            .search(&params.workspace_id, &params.query, params.cursor.as_deref())
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("searching docs", &e)),
        }
    }

    pub async fn get_docs_from_workspace(
        &self,
        Parameters(params): Parameters<GetDocsFromWorkspaceParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut query = body_without(&params, &["workspace_id"])?;
        query.entry("deleted").or_insert(json!(false));
        query.entry("archived").or_insert(json!(false));
        query.entry("limit").or_insert(json!(50));
        match self
            .api
            .docs()
            .docs_in_workspace(&params.workspace_id, &query)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("getting docs", &e)),
        }
    }

    pub async fn get_doc_pages(
        &self,
        Parameters(params): Parameters<GetDocPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let format = params.content_format.as_deref().unwrap_or("text/md");
        match self
            .api
            .docs()
            .doc_pages(&params.workspace_id, &params.doc_id, format)
            .await
        {
            Ok(pages) => json_text(&pages),
            Err(e) => Ok(api_failure("getting doc pages", &e)),
        }
    }

    pub async fn create_doc(
        &self,
        Parameters(params): Parameters<CreateDocParams>,
    ) -> Result<CallToolResult, McpError> {
        // The upstream API calls the title "name".
        let mut body = body_without(&params, &["container_type", "container_id", "title"])?;
        body.insert("name".into(), json!(params.title));
        let docs = self.api.docs();
        let result = match params.container_type.as_str() {
            "list" => docs.create_doc_in_list(&params.container_id, &body).await,
            "folder" => docs.create_doc_in_folder(&params.container_id, &body).await,
            other => return Ok(invalid_container(other, "list, folder")),
        };
        match result {
            Ok(doc) => json_text(&doc),
            Err(e) => Ok(api_failure("creating doc", &e)),
        }
    }

    pub async fn update_doc(
        &self,
        Parameters(params): Parameters<UpdateDocParams>,
    ) -> Result<CallToolResult, McpError> {
        let mut body = body_without(&params, &["doc_id", "title"])?;
        if let Some(title) = &params.title {
            body.insert("name".into(), json!(title));
        }
        match self.api.docs().update_doc(&params.doc_id, &body).await {
            Ok(doc) => json_text(&doc),
            Err(e) => Ok(api_failure("updating doc", &e)),
        }
    }
}
