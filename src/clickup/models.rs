use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A task as returned by the v2 API. Only the fields the server inspects
/// are typed; everything else rides along in `extra` so responses pass
/// through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The list a task belongs to, as embedded in task payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response envelope of the task listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPage {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A doc page from the v3 API. Pages nest arbitrarily deep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
