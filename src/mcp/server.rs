//! The MCP server coordinator.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::wrapper::Parameters,
    model::*, service::RequestContext,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clickup::ClickUpApi;
use crate::mcp::registry::{RegistryError, ToolRegistry};
use crate::mcp::resources::{self, MIME_JSON, ResourceRouter, STATIC_RESOURCES};
use crate::mcp::tools::{
    ChecklistTools, CommentTools, DocTools, FolderTools, ListTools, SpaceTools, TaskTools, ToolId,
    WorkspaceTools, checklists, comments, docs, folders, lists, spaces, tasks, workspaces,
};

/// Every tool, in listing order.
pub(crate) fn catalog() -> Vec<(Tool, ToolId)> {
    let mut catalog = Vec::new();
    catalog.extend(workspaces::catalog());
    catalog.extend(tasks::catalog());
    catalog.extend(lists::catalog());
    catalog.extend(folders::catalog());
    catalog.extend(spaces::catalog());
    catalog.extend(docs::catalog());
    catalog.extend(checklists::catalog());
    catalog.extend(comments::catalog());
    catalog
}

pub struct ClickUpServer<A: ClickUpApi> {
    api: Arc<A>,
    registry: ToolRegistry,
    router: ResourceRouter,
    workspaces: WorkspaceTools<A>,
    tasks: TaskTools<A>,
    lists: ListTools<A>,
    folders: FolderTools<A>,
    spaces: SpaceTools<A>,
    docs: DocTools<A>,
    checklists: ChecklistTools<A>,
    comments: CommentTools<A>,
}

impl<A: ClickUpApi> ClickUpServer<A> {
    /// Builds the full catalog. Fails if two tools share a name or two
    /// resource templates overlap, so a wiring defect cannot reach
    /// serving.
    pub fn new(api: Arc<A>) -> Result<Self, RegistryError> {
        let registry = ToolRegistry::new(catalog())?;
        let router = ResourceRouter::new()?;
        Ok(Self {
            registry,
            router,
            workspaces: WorkspaceTools::new(Arc::clone(&api)),
            tasks: TaskTools::new(Arc::clone(&api)),
            lists: ListTools::new(Arc::clone(&api)),
            folders: FolderTools::new(Arc::clone(&api)),
            spaces: SpaceTools::new(Arc::clone(&api)),
            docs: DocTools::new(Arc::clone(&api)),
            checklists: ChecklistTools::new(Arc::clone(&api)),
            comments: CommentTools::new(Arc::clone(&api)),
            api,
        })
    }

    /// Resolves a tool call to its handler and shapes every failure
    /// into an error envelope, so callers never see a protocol error
    /// for a tool-level problem.
    pub(crate) async fn handle_call(&self, name: &str, args: JsonObject) -> CallToolResult {
        let Some((id, required)) = self.registry.lookup(name) else {
            return CallToolResult::error(vec![Content::text(format!("Unknown tool: {name}"))]);
        };
        // Uniform presence check, so every tool reports missing
        // arguments the same way.
        let missing = required
            .iter()
            .find(|arg| matches!(args.get(arg.as_str()), None | Some(Value::Null)));
        if let Some(arg) = missing {
            return CallToolResult::error(vec![Content::text(format!("{arg} is required"))]);
        }
        match self.dispatch(id, args).await {
            Ok(result) => result,
            // Last-resort shaping; handlers normally produce their own
            // error envelopes.
            Err(e) => CallToolResult::error(vec![Content::text(format!("Error: {}", e.message))]),
        }
    }

    fn parse<T: DeserializeOwned>(args: JsonObject) -> Result<Parameters<T>, McpError> {
        serde_json::from_value(Value::Object(args))
            .map(Parameters)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    async fn dispatch(&self, id: ToolId, args: JsonObject) -> Result<CallToolResult, McpError> {
        match id {
            ToolId::GetWorkspaces => self.workspaces.get_workspaces().await,
            ToolId::GetWorkspaceSeats => {
                self.workspaces.get_workspace_seats(Self::parse(args)?).await
            }
            ToolId::GetAuthorizedUser => self.workspaces.get_authorized_user().await,
            ToolId::GetTasks => self.tasks.get_tasks(Self::parse(args)?).await,
            ToolId::GetTaskDetails => self.tasks.get_task_details(Self::parse(args)?).await,
            ToolId::GetSubtasks => self.tasks.get_subtasks(Self::parse(args)?).await,
            ToolId::CreateTask => self.tasks.create_task(Self::parse(args)?).await,
            ToolId::UpdateTask => self.tasks.update_task(Self::parse(args)?).await,
            ToolId::DeleteTask => self.tasks.delete_task(Self::parse(args)?).await,
            ToolId::GetLists => self.lists.get_lists(Self::parse(args)?).await,
            ToolId::GetFolderlessLists => {
                self.lists.get_folderless_lists(Self::parse(args)?).await
            }
            ToolId::CreateList => self.lists.create_list(Self::parse(args)?).await,
            ToolId::CreateFolderlessList => {
                self.lists.create_folderless_list(Self::parse(args)?).await
            }
            ToolId::GetList => self.lists.get_list(Self::parse(args)?).await,
            ToolId::UpdateList => self.lists.update_list(Self::parse(args)?).await,
            ToolId::DeleteList => self.lists.delete_list(Self::parse(args)?).await,
            ToolId::AddTaskToList => self.lists.add_task_to_list(Self::parse(args)?).await,
            ToolId::RemoveTaskFromList => {
                self.lists.remove_task_from_list(Self::parse(args)?).await
            }
            ToolId::CreateListFromTemplateInFolder => {
                self.lists
                    .create_list_from_template_in_folder(Self::parse(args)?)
                    .await
            }
            ToolId::CreateListFromTemplateInSpace => {
                self.lists
                    .create_list_from_template_in_space(Self::parse(args)?)
                    .await
            }
            ToolId::GetFolders => self.folders.get_folders(Self::parse(args)?).await,
            ToolId::CreateFolder => self.folders.create_folder(Self::parse(args)?).await,
            ToolId::UpdateFolder => self.folders.update_folder(Self::parse(args)?).await,
            ToolId::DeleteFolder => self.folders.delete_folder(Self::parse(args)?).await,
            ToolId::GetSpaces => self.spaces.get_spaces(Self::parse(args)?).await,
            ToolId::GetSpace => self.spaces.get_space(Self::parse(args)?).await,
            ToolId::GetDocContent => self.docs.get_doc_content(Self::parse(args)?).await,
            ToolId::SearchDocs => self.docs.search_docs(Self::parse(args)?).await,
            ToolId::GetDocsFromWorkspace => {
                self.docs.get_docs_from_workspace(Self::parse(args)?).await
            }
            ToolId::GetDocPages => self.docs.get_doc_pages(Self::parse(args)?).await,
            ToolId::CreateDoc => self.docs.create_doc(Self::parse(args)?).await,
            ToolId::UpdateDoc => self.docs.update_doc(Self::parse(args)?).await,
            ToolId::CreateChecklist => self.checklists.create_checklist(Self::parse(args)?).await,
            ToolId::UpdateChecklist => self.checklists.update_checklist(Self::parse(args)?).await,
            ToolId::DeleteChecklist => self.checklists.delete_checklist(Self::parse(args)?).await,
            ToolId::CreateChecklistItem => {
                self.checklists.create_checklist_item(Self::parse(args)?).await
            }
            ToolId::UpdateChecklistItem => {
                self.checklists.update_checklist_item(Self::parse(args)?).await
            }
            ToolId::DeleteChecklistItem => {
                self.checklists.delete_checklist_item(Self::parse(args)?).await
            }
            ToolId::GetTaskComments => self.comments.get_task_comments(Self::parse(args)?).await,
            ToolId::CreateTaskComment => {
                self.comments.create_task_comment(Self::parse(args)?).await
            }
            ToolId::GetChatViewComments => {
                self.comments.get_chat_view_comments(Self::parse(args)?).await
            }
            ToolId::CreateChatViewComment => {
                self.comments.create_chat_view_comment(Self::parse(args)?).await
            }
            ToolId::GetListComments => self.comments.get_list_comments(Self::parse(args)?).await,
            ToolId::CreateListComment => {
                self.comments.create_list_comment(Self::parse(args)?).await
            }
            ToolId::UpdateComment => self.comments.update_comment(Self::parse(args)?).await,
            ToolId::DeleteComment => self.comments.delete_comment(Self::parse(args)?).await,
            ToolId::GetThreadedComments => {
                self.comments.get_threaded_comments(Self::parse(args)?).await
            }
            ToolId::CreateThreadedComment => {
                self.comments.create_threaded_comment(Self::parse(args)?).await
            }
        }
    }
}

impl<A: ClickUpApi> ServerHandler for ClickUpServer<A> {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: Default::default(),
            server_info: Implementation {
                name: "clickup-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability::default()),
                resources: Some(ResourcesCapability {
                    subscribe: None,
                    list_changed: None,
                }),
                ..Default::default()
            },
            instructions: Some(
                "Work with ClickUp workspaces, tasks, lists, folders, spaces, docs, \
                 checklists and comments. Entities can also be read through \
                 clickup:// resource URIs."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.registry.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request.arguments.unwrap_or_default();
        Ok(self.handle_call(&request.name, args).await)
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let resources = STATIC_RESOURCES
            .iter()
            .map(|(uri, name, description)| {
                let mime_type = self
                    .router
                    .route(uri)
                    .map(|m| m.mime_type)
                    .unwrap_or(MIME_JSON);
                RawResource {
                    uri: (*uri).to_string(),
                    name: (*name).to_string(),
                    title: None,
                    description: Some((*description).to_string()),
                    mime_type: Some(mime_type.to_string()),
                    size: None,
                    icons: None,
                    meta: None,
                }
                .no_annotation()
            })
            .collect();
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        let resource_templates = self
            .router
            .template_defs()
            .map(|def| {
                ResourceTemplate::new(
                    RawResourceTemplate {
                        uri_template: def.template.to_string(),
                        name: def.name.to_string(),
                        title: None,
                        description: Some(def.description.to_string()),
                        mime_type: Some(def.mime_type.to_string()),
                        icons: None,
                    },
                    None,
                )
            })
            .collect();
        Ok(ListResourceTemplatesResult {
            resource_templates,
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        resources::read_resource(self.api.as_ref(), &self.router, &request.uri).await
    }
}
