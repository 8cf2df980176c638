//! Startup-time tool registration.
//!
//! Every tool is declared once, with its schema and a dispatch id. The
//! registry rejects duplicate names so a wiring mistake aborts startup
//! instead of shadowing a tool at call time.

use std::collections::HashMap;
use std::sync::Arc;

use miette::Diagnostic;
use rmcp::model::{JsonObject, Tool};
use rmcp::schemars::{self, JsonSchema};
use serde_json::Value;
use thiserror::Error;

use crate::mcp::tools::ToolId;

#[derive(Error, Diagnostic, Debug)]
pub enum RegistryError {
    #[error("tool '{name}' is registered more than once")]
    #[diagnostic(code(clickup_mcp::mcp::duplicate_tool))]
    DuplicateTool { name: String },

    #[error("resource template '{second}' overlaps '{first}'")]
    #[diagnostic(
        code(clickup_mcp::mcp::ambiguous_template),
        help("every URI must match at most one template; adjust the path shapes")
    )]
    AmbiguousTemplate { first: String, second: String },

    #[error("resource template '{template}' does not compile: {message}")]
    #[diagnostic(code(clickup_mcp::mcp::invalid_template))]
    InvalidTemplate { template: String, message: String },
}

/// Builds the `Tool` descriptor for a parameter struct.
pub(crate) fn tool_spec<P: JsonSchema>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        title: None,
        description: Some(description.into()),
        input_schema: schema_object::<P>(),
        output_schema: None,
        annotations: None,
        icons: None,
        meta: None,
    }
}

fn schema_object<P: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(P);
    match serde_json::to_value(&schema) {
        Ok(Value::Object(map)) => Arc::new(map),
        _ => Arc::new(JsonObject::new()),
    }
}

#[derive(Debug)]
struct ToolEntry {
    id: ToolId,
    required: Vec<String>,
}

/// The single name-to-handler mapping. Listing order is registration
/// order and never changes after construction.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
    index: HashMap<String, ToolEntry>,
}

impl ToolRegistry {
    pub fn new(catalog: Vec<(Tool, ToolId)>) -> Result<Self, RegistryError> {
        let mut tools = Vec::with_capacity(catalog.len());
        let mut index = HashMap::with_capacity(catalog.len());
        for (tool, id) in catalog {
            let name = tool.name.to_string();
            let entry = ToolEntry {
                id,
                required: required_args(&tool),
            };
            if index.insert(name.clone(), entry).is_some() {
                return Err(RegistryError::DuplicateTool { name });
            }
            tools.push(tool);
        }
        Ok(Self { tools, index })
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.tools.clone()
    }

    /// Dispatch id and declared-required argument names for a tool.
    pub fn lookup(&self, name: &str) -> Option<(ToolId, &[String])> {
        self.index
            .get(name)
            .map(|entry| (entry.id, entry.required.as_slice()))
    }
}

/// Required argument names, in schema declaration order.
fn required_args(tool: &Tool) -> Vec<String> {
    tool.input_schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
