//! MCP tools for comments: on tasks, chat views, lists and threads.

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
pub struct GetTaskCommentsParams {
    #[schemars(description = "Task ID")]
    pub task_id: String,
    #[schemars(description = "Unix timestamp (ms) to start pagination from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[schemars(description = "Comment ID to start pagination from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskCommentParams {
    #[schemars(description = "Task ID to comment on")]
    pub task_id: String,
    #[schemars(description = "Comment text")]
    pub comment_text: String,
    #[schemars(description = "User ID to assign the comment to")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[schemars(description = "Notify everyone on the task")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetChatViewCommentsParams {
    #[schemars(description = "Chat view ID")]
    pub view_id: String,
    #[schemars(description = "Unix timestamp (ms) to start pagination from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[schemars(description = "Comment ID to start pagination from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateChatViewCommentParams {
    #[schemars(description = "Chat view ID to comment in")]
    pub view_id: String,
    #[schemars(description = "Comment text")]
    pub comment_text: String,
    #[schemars(description = "Notify everyone in the view")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetListCommentsParams {
    #[schemars(description = "List ID")]
    pub list_id: String,
    #[schemars(description = "Unix timestamp (ms) to start pagination from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[schemars(description = "Comment ID to start pagination from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListCommentParams {
    #[schemars(description = "List ID to comment on")]
    pub list_id: String,
    #[schemars(description = "Comment text")]
    pub comment_text: String,
    #[schemars(description = "User ID to assign the comment to")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[schemars(description = "Notify everyone on the list")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCommentParams {
    #[schemars(description = "Comment ID to update")]
    pub comment_id: String,
    #[schemars(description = "New comment text")]
    pub comment_text: String,
    #[schemars(description = "User ID to assign the comment to")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[schemars(description = "Resolved state")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteCommentParams {
    #[schemars(description = "Comment ID to delete")]
    pub comment_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetThreadedCommentsParams {
    #[schemars(description = "ID of the parent comment")]
    pub comment_id: String,
    #[schemars(description = "Unix timestamp (ms) to start pagination from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[schemars(description = "Comment ID to start pagination from")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateThreadedCommentParams {
    #[schemars(description = "ID of the parent comment to reply to")]
    pub comment_id: String,
    #[schemars(description = "Reply text")]
    pub comment_text: String,
    #[schemars(description = "Notify everyone in the thread")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
}

pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    vec![
        (
            tool_spec::<GetTaskCommentsParams>("get_task_comments", "Get comments on a task"),
            ToolId::GetTaskComments,
        ),
        (
            tool_spec::<CreateTaskCommentParams>("create_task_comment", "Comment on a task"),
            ToolId::CreateTaskComment,
        ),
        (
            tool_spec::<GetChatViewCommentsParams>(
                "get_chat_view_comments",
                "Get comments of a chat view",
            ),
            ToolId::GetChatViewComments,
        ),
        (
            tool_spec::<CreateChatViewCommentParams>(
                "create_chat_view_comment",
                "Comment in a chat view",
            ),
            ToolId::CreateChatViewComment,
        ),
        (
            tool_spec::<GetListCommentsParams>("get_list_comments", "Get comments on a list"),
            ToolId::GetListComments,
        ),
        (
            tool_spec::<CreateListCommentParams>("create_list_comment", "Comment on a list"),
            ToolId::CreateListComment,
        ),
        (
            tool_spec::<UpdateCommentParams>("update_comment", "Update an existing comment"),
            ToolId::UpdateComment,
        ),
        (
            tool_spec::<DeleteCommentParams>("delete_comment", "Delete a comment"),
            ToolId::DeleteComment,
        ),
        (
            tool_spec::<GetThreadedCommentsParams>(
                "get_threaded_comments",
                "Get threaded replies to a comment",
            ),
            ToolId::GetThreadedComments,
        ),
        (
            tool_spec::<CreateThreadedCommentParams>(
                "create_threaded_comment",
                "Reply to a comment",
            ),
            ToolId::CreateThreadedComment,
        ),
    ]
}

pub struct CommentTools<A: ClickUpApi> {
    api: Arc<A>,
}

impl<A: ClickUpApi> CommentTools<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn get_task_comments(
        &self,
        Parameters(params): Parameters<GetTaskCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = body_without(&params, &["task_id"])?;
        match self
            .api
            .comments()
            .task_comments(&params.task_id, &query)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("getting task comments", &e)),
        }
    }

    pub async fn create_task_comment(
        &self,
        Parameters(params): Parameters<CreateTaskCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["task_id"])?;
        match self
            .api
            .comments()
            .create_task_comment(&params.task_id, &body)
            .await
        {
            Ok(comment) => json_text(&comment),
            Err(e) => Ok(api_failure("creating task comment", &e)),
        }
    }

    pub async fn get_chat_view_comments(
        &self,
        Parameters(params): Parameters<GetChatViewCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = body_without(&params, &["view_id"])?;
        match self
            .api
            .comments()
            .chat_view_comments(&params.view_id, &query)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("getting chat view comments", &e)),
        }
    }

    pub async fn create_chat_view_comment(
        &self,
        Parameters(params): Parameters<CreateChatViewCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["view_id"])?;
        match self
            .api
            .comments()
            .create_chat_view_comment(&params.view_id, &body)
            .await
        {
            Ok(comment) => json_text(&comment),
            Err(e) => Ok(api_failure("creating chat view comment", &e)),
        }
    }

    pub async fn get_list_comments(
        &self,
        Parameters(params): Parameters<GetListCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = body_without(&params, &["list_id"])?;
        match self
            .api
            .comments()
            .list_comments(&params.list_id, &query)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("getting list comments", &e)),
        }
    }

    pub async fn create_list_comment(
        &self,
        Parameters(params): Parameters<CreateListCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["list_id"])?;
        match self
            .api
            .comments()
            .create_list_comment(&params.list_id, &body)
            .await
        {
            Ok(comment) => json_text(&comment),
            Err(e) => Ok(api_failure("creating list comment", &e)),
        }
    }

    pub async fn update_comment(
        &self,
        Parameters(params): Parameters<UpdateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["comment_id"])?;
        match self
            .api
            .comments()
            .update_comment(&params.comment_id, &body)
            .await
        {
            Ok(comment) => json_text(&comment),
            Err(e) => Ok(api_failure("updating comment", &e)),
        }
    }

    pub async fn delete_comment(
        &self,
        Parameters(params): Parameters<DeleteCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.api.comments().delete_comment(&params.comment_id).await {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("deleting comment", &e)),
        }
    }

    pub async fn get_threaded_comments(
        &self,
        Parameters(params): Parameters<GetThreadedCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let query = body_without(&params, &["comment_id"])?;
        match self
            .api
            .comments()
            .threaded_comments(&params.comment_id, &query)
            .await
        {
            Ok(body) => json_text(&body),
            Err(e) => Ok(api_failure("getting threaded comments", &e)),
        }
    }

    pub async fn create_threaded_comment(
        &self,
        Parameters(params): Parameters<CreateThreadedCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let body = body_without(&params, &["comment_id"])?;
        match self
            .api
            .comments()
            .create_threaded_comment(&params.comment_id, &body)
            .await
        {
            Ok(comment) => json_text(&comment),
            Err(e) => Ok(api_failure("creating threaded comment", &e)),
        }
    }
}
