pub mod api;
pub mod error;
pub mod http;
pub mod models;

mod auth;
mod checklists;
mod client;
mod comments;
mod docs;
mod folders;
mod lists;
mod spaces;
mod tasks;

pub use api::{
    AuthApi, ChecklistsApi, ClickUpApi, CommentsApi, DocsApi, FoldersApi, ListsApi, SpacesApi,
    TasksApi,
};
pub use client::ClickUpClient;
pub use error::{ApiError, ApiResult};
