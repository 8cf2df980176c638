use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Map, Value, json};

use crate::clickup::models::Page;
use crate::mcp::test_support::{StubApi, content_text};
use crate::mcp::tools::DocTools;
use crate::mcp::tools::docs::{NO_DOC_CONTENT, combined_page_content};

fn page(content: Option<&str>, children: Vec<Page>) -> Page {
    Page {
        content: content.map(str::to_string),
        pages: children,
        extra: Map::new(),
    }
}

fn params<T: serde::de::DeserializeOwned>(value: Value) -> Parameters<T> {
    Parameters(serde_json::from_value(value).expect("Params should deserialize"))
}

#[test]
fn combined_content_walks_pages_depth_first() {
    let pages = vec![
        page(Some("Alpha"), vec![page(Some("Beta"), vec![])]),
        page(Some("Gamma"), vec![]),
    ];
    assert_eq!(combined_page_content(&pages), "Alpha\n\nBeta\n\nGamma");
}

#[test]
fn combined_content_skips_empty_pages() {
    let pages = vec![
        page(None, vec![page(Some("Only child"), vec![])]),
        page(Some(""), vec![]),
    ];
    assert_eq!(combined_page_content(&pages), "Only child");
}

#[test]
fn combined_content_falls_back_when_nothing_has_text() {
    assert_eq!(combined_page_content(&[]), NO_DOC_CONTENT);
    let pages = vec![page(None, vec![]), page(Some(""), vec![])];
    assert_eq!(combined_page_content(&pages), NO_DOC_CONTENT);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_doc_content_returns_plain_text() {
    let api = Arc::new(StubApi {
        doc_pages: Some(vec![page(
            Some("Alpha"),
            vec![page(Some("Beta"), vec![])],
        )]),
        ..StubApi::default()
    });
    let tools = DocTools::new(api.clone());
    let result = tools
        .get_doc_content(params(json!({
            "doc_id": "d1",
            "workspace_id": "ws1",
        })))
        .await
        .expect("get_doc_content should succeed");
    assert_ne!(result.is_error, Some(true));
    assert_eq!(content_text(&result), "Alpha\n\nBeta");
    assert_eq!(api.calls(), vec!["doc_pages:ws1:d1:text/md".to_string()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_docs_from_workspace_fills_in_defaults() {
    let api = Arc::new(StubApi {
        docs: Some(json!({ "docs": [] })),
        ..StubApi::default()
    });
    let tools = DocTools::new(api.clone());
    tools
        .get_docs_from_workspace(params(json!({ "workspace_id": "ws1" })))
        .await
        .expect("get_docs_from_workspace should succeed");
    let call = &api.calls()[0];
    assert!(call.starts_with("docs_in_workspace:ws1:"), "got {call}");
    assert!(call.contains("\"deleted\":false"), "got {call}");
    assert!(call.contains("\"archived\":false"), "got {call}");
    assert!(call.contains("\"limit\":50"), "got {call}");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_docs_from_workspace_keeps_explicit_filters() {
    let api = Arc::new(StubApi {
        docs: Some(json!({ "docs": [] })),
        ..StubApi::default()
    });
    let tools = DocTools::new(api.clone());
    tools
        .get_docs_from_workspace(params(json!({
            "workspace_id": "ws1",
            "deleted": true,
            "limit": 5,
        })))
        .await
        .expect("get_docs_from_workspace should succeed");
    let call = &api.calls()[0];
    assert!(call.contains("\"deleted\":true"), "got {call}");
    assert!(call.contains("\"limit\":5"), "got {call}");
    assert!(!call.contains("\"limit\":50"), "got {call}");
}
