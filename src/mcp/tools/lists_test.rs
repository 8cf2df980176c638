use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};

use crate::mcp::test_support::{StubApi, content_text};
use crate::mcp::tools::ListTools;

fn params<T: serde::de::DeserializeOwned>(value: Value) -> Parameters<T> {
    Parameters(serde_json::from_value(value).expect("Params should deserialize"))
}

#[tokio::test(flavor = "multi_thread")]
async fn get_lists_reads_folder_containers() {
    let api = Arc::new(StubApi {
        folder_lists: Some(json!({ "lists": [{ "id": "L1" }] })),
        ..StubApi::default()
    });
    let tools = ListTools::new(api.clone());
    let result = tools
        .get_lists(params(json!({
            "container_type": "folder",
            "container_id": "f1",
        })))
        .await
        .expect("get_lists should succeed");
    assert_ne!(result.is_error, Some(true));
    assert_eq!(api.calls(), vec!["lists_in_folder:f1".to_string()]);
    let body: Value = serde_json::from_str(content_text(&result)).expect("Should return JSON");
    assert_eq!(body["lists"][0]["id"], "L1");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_lists_reads_space_containers() {
    let api = Arc::new(StubApi {
        space_lists: Some(json!({ "lists": [] })),
        ..StubApi::default()
    });
    let tools = ListTools::new(api.clone());
    let result = tools
        .get_lists(params(json!({
            "container_type": "space",
            "container_id": "s1",
        })))
        .await
        .expect("get_lists should succeed");
    assert_ne!(result.is_error, Some(true));
    assert_eq!(api.calls(), vec!["folderless_lists:s1".to_string()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_lists_rejects_unknown_container_type() {
    let api = Arc::new(StubApi::default());
    let tools = ListTools::new(api.clone());
    let result = tools
        .get_lists(params(json!({
            "container_type": "workspace",
            "container_id": "s1",
        })))
        .await
        .expect("invalid container should produce an error result");
    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        content_text(&result),
        "Invalid container_type: workspace. Must be one of: folder, space"
    );
    assert!(api.calls().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_list_dispatches_and_strips_routing_fields() {
    let api = Arc::new(StubApi::default());
    let tools = ListTools::new(api.clone());
    let result = tools
        .create_list(params(json!({
            "container_type": "folder",
            "container_id": "f1",
            "name": "Sprint 12",
        })))
        .await
        .expect("create_list should succeed");
    assert_ne!(result.is_error, Some(true));
    let call = &api.calls()[0];
    assert!(call.starts_with("create_list:f1:"), "got {call}");
    assert!(call.contains("\"name\":\"Sprint 12\""), "got {call}");
    assert!(!call.contains("container_type"), "got {call}");
    let created: Value = serde_json::from_str(content_text(&result)).expect("Should return JSON");
    assert_eq!(created, json!({ "name": "Sprint 12" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_list_in_space_uses_folderless_endpoint() {
    let api = Arc::new(StubApi::default());
    let tools = ListTools::new(api.clone());
    tools
        .create_list(params(json!({
            "container_type": "space",
            "container_id": "s1",
            "name": "Backlog",
        })))
        .await
        .expect("create_list should succeed");
    assert!(api.calls()[0].starts_with("create_folderless_list:s1:"));
}
