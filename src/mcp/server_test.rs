use std::collections::HashSet;
use std::sync::Arc;

use rmcp::model::{JsonObject, ResourceContents};
use serde_json::{Map, Value, json};

use crate::clickup::models::Task;
use crate::mcp::resources::{ResourceRouter, probe_uri, read_resource};
use crate::mcp::server::{ClickUpServer, catalog};
use crate::mcp::test_support::{StubApi, content_text};

fn server(api: Arc<StubApi>) -> ClickUpServer<StubApi> {
    ClickUpServer::new(api).expect("catalog should register cleanly")
}

fn args(value: Value) -> JsonObject {
    value.as_object().cloned().expect("arguments must be an object")
}

#[test]
fn catalog_has_unique_names_in_registration_order() {
    let names: Vec<String> = catalog()
        .iter()
        .map(|(tool, _)| tool.name.to_string())
        .collect();
    assert_eq!(names.len(), 48);
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
    assert_eq!(names[0], "get_workspaces");
    assert_eq!(names[3], "get_tasks");
    assert_eq!(names.last().map(String::as_str), Some("create_threaded_comment"));
    // A second build yields the same listing.
    let again: Vec<String> = catalog()
        .iter()
        .map(|(tool, _)| tool.name.to_string())
        .collect();
    assert_eq!(names, again);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_tool_returns_error_result() {
    let server = server(Arc::new(StubApi::default()));
    let result = server.handle_call("does_not_exist", JsonObject::new()).await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(content_text(&result), "Unknown tool: does_not_exist");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_required_argument_is_reported_by_name() {
    let server = server(Arc::new(StubApi::default()));
    let result = server.handle_call("get_task_details", JsonObject::new()).await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(content_text(&result), "task_id is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn first_missing_argument_wins() {
    let server = server(Arc::new(StubApi::default()));
    let result = server.handle_call("get_tasks", JsonObject::new()).await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(content_text(&result), "container_type is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn explicit_null_counts_as_missing() {
    let server = server(Arc::new(StubApi::default()));
    let result = server
        .handle_call("get_task_details", args(json!({ "task_id": null })))
        .await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(content_text(&result), "task_id is required");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_task_round_trips_through_dispatch() {
    let server = server(Arc::new(StubApi::default()));
    let result = server
        .handle_call(
            "create_task",
            args(json!({ "list_id": "901", "name": "Test" })),
        )
        .await;
    assert_ne!(result.is_error, Some(true));
    let created: Value =
        serde_json::from_str(content_text(&result)).expect("Should return valid JSON");
    assert_eq!(created, json!({ "list_id": "901", "name": "Test" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn backend_failures_become_error_results() {
    let server = server(Arc::new(StubApi::default()));
    let result = server
        .handle_call("get_space", args(json!({ "space_id": "s1" })))
        .await;
    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        content_text(&result),
        "Error getting space: ClickUp API error (500): not stubbed"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn every_tool_answers_minimal_valid_arguments() {
    let server = server(Arc::new(StubApi::default()));
    for (tool, _) in catalog() {
        let mut args = JsonObject::new();
        if let Some(required) = tool.input_schema.get("required").and_then(Value::as_array) {
            for name in required.iter().filter_map(Value::as_str) {
                args.insert(name.to_string(), json!("x"));
            }
        }
        // Success or error envelope, never a panic or empty reply.
        let result = server.handle_call(&tool.name, args).await;
        assert!(
            !result.content.is_empty(),
            "tool {} returned no content",
            tool.name
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn every_template_echoes_its_probe_uri() {
    let api = StubApi {
        task: Some(Task {
            id: "t1".to_string(),
            name: "A task".to_string(),
            parent: None,
            list: None,
            extra: Map::new(),
        }),
        doc_pages: Some(vec![]),
        task_comments: Some(json!({ "comments": [] })),
        folder_lists: Some(json!({ "lists": [] })),
        space_lists: Some(json!({ "lists": [] })),
        payload: Some(json!({ "id": "probe" })),
        ..StubApi::default()
    };
    let router = ResourceRouter::new().expect("catalog should compile");
    let templates: Vec<String> = router
        .template_defs()
        .map(|def| def.template.to_string())
        .collect();
    assert_eq!(templates.len(), 15);
    for template in templates {
        let uri = probe_uri(&template);
        let result = read_resource(&api, &router, &uri)
            .await
            .unwrap_or_else(|e| panic!("read of {uri} failed: {e}"));
        let ResourceContents::TextResourceContents { uri: echoed, .. } = &result.contents[0]
        else {
            panic!("Expected text resource contents for {uri}");
        };
        assert_eq!(echoed, &uri);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn reading_a_resource_echoes_the_request_uri() {
    let api = StubApi {
        task_comments: Some(json!({ "comments": [{ "id": "c1" }] })),
        ..StubApi::default()
    };
    let router = ResourceRouter::new().expect("catalog should compile");
    let result = read_resource(&api, &router, "clickup://task/868czp2t3/comments")
        .await
        .expect("read should succeed");
    let ResourceContents::TextResourceContents {
        uri,
        mime_type,
        text,
        ..
    } = &result.contents[0]
    else {
        panic!("Expected text resource contents");
    };
    assert_eq!(uri, "clickup://task/868czp2t3/comments");
    assert_eq!(mime_type.as_deref(), Some("application/json"));
    let body: Value = serde_json::from_str(text).expect("Should return valid JSON");
    assert_eq!(body["comments"][0]["id"], "c1");
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_resource_is_a_protocol_error() {
    let api = StubApi::default();
    let router = ResourceRouter::new().expect("catalog should compile");
    let err = read_resource(&api, &router, "clickup://nope")
        .await
        .expect_err("unmatched URIs must fail the read");
    assert!(err.message.contains("Unknown resource"), "got {}", err.message);
}

#[tokio::test(flavor = "multi_thread")]
async fn doc_resource_yields_markdown_with_fallback() {
    let api = StubApi {
        doc_pages: Some(vec![]),
        ..StubApi::default()
    };
    let router = ResourceRouter::new().expect("catalog should compile");
    let result = read_resource(&api, &router, "clickup://workspace/9011/doc/8cjbgz8-911")
        .await
        .expect("read should succeed");
    let ResourceContents::TextResourceContents {
        mime_type, text, ..
    } = &result.contents[0]
    else {
        panic!("Expected text resource contents");
    };
    assert_eq!(mime_type.as_deref(), Some("text/markdown"));
    assert_eq!(text, "No content found in this doc.");
}
