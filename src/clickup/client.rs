use std::sync::Arc;

use crate::clickup::api::{
    AuthApi, ChecklistsApi, ClickUpApi, CommentsApi, DocsApi, FoldersApi, ListsApi, SpacesApi,
    TasksApi,
};
use crate::clickup::auth::AuthClient;
use crate::clickup::checklists::ChecklistsClient;
use crate::clickup::comments::CommentsClient;
use crate::clickup::docs::DocsClient;
use crate::clickup::folders::FoldersClient;
use crate::clickup::http::Http;
use crate::clickup::lists::ListsClient;
use crate::clickup::spaces::SpacesClient;
use crate::clickup::tasks::TasksClient;
use crate::config::Config;

/// Live client against the ClickUp REST API. All categories share one
/// reqwest client and token.
pub struct ClickUpClient {
    auth: AuthClient,
    tasks: TasksClient,
    lists: ListsClient,
    folders: FoldersClient,
    spaces: SpacesClient,
    docs: DocsClient,
    comments: CommentsClient,
    checklists: ChecklistsClient,
}

impl ClickUpClient {
    pub fn new(config: &Config) -> Self {
        let http = Arc::new(Http::new(config));
        Self {
            auth: AuthClient::new(Arc::clone(&http)),
            tasks: TasksClient::new(Arc::clone(&http)),
            lists: ListsClient::new(Arc::clone(&http)),
            folders: FoldersClient::new(Arc::clone(&http)),
            spaces: SpacesClient::new(Arc::clone(&http)),
            docs: DocsClient::new(Arc::clone(&http)),
            comments: CommentsClient::new(Arc::clone(&http)),
            checklists: ChecklistsClient::new(http),
        }
    }
}

impl ClickUpApi for ClickUpClient {
    fn auth(&self) -> &dyn AuthApi {
        &self.auth
    }

    fn tasks(&self) -> &dyn TasksApi {
        &self.tasks
    }

    fn lists(&self) -> &dyn ListsApi {
        &self.lists
    }

    fn folders(&self) -> &dyn FoldersApi {
        &self.folders
    }

    fn spaces(&self) -> &dyn SpacesApi {
        &self.spaces
    }

    fn docs(&self) -> &dyn DocsApi {
        &self.docs
    }

    fn comments(&self) -> &dyn CommentsApi {
        &self.comments
    }

    fn checklists(&self) -> &dyn ChecklistsApi {
        &self.checklists
    }
}
