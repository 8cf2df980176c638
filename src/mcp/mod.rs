//! Model Context Protocol (MCP) server implementation
//!
//! The server speaks the stdio transport and exposes the ClickUp API
//! two ways:
//!
//! - **tools**: one registry maps each tool name to a dispatch id;
//!   duplicate names abort startup
//! - **resources**: one router matches `clickup://` URI templates;
//!   overlapping templates abort startup
//!
//! Tool structs are generic over `A: ClickUpApi` so tests run against
//! stub bindings.

pub mod registry;
pub mod resources;
pub mod server;
pub mod tools;

#[cfg(test)]
mod server_test;
#[cfg(test)]
pub(crate) mod test_support;

pub use registry::{RegistryError, ToolRegistry};
pub use resources::ResourceRouter;
pub use server::ClickUpServer;
