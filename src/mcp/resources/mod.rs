//! URI-addressable resources.
//!
//! All templates live in one ordered registry. Each compiles to an
//! anchored regex where a `{variable}` matches a single path segment;
//! construction proves the templates are mutually unambiguous, so
//! first-match-wins routing is deterministic.

mod read;

pub(crate) use read::read_resource;

use regex::Regex;

use crate::mcp::registry::RegistryError;

pub(crate) const MIME_JSON: &str = "application/json";
pub(crate) const MIME_MARKDOWN: &str = "text/markdown";

/// A matched resource URI, with the path variables already extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRoute {
    Task { task_id: String },
    TaskComments { task_id: String },
    ViewComments { view_id: String },
    ListComments { list_id: String },
    ThreadedComments { comment_id: String },
    TaskChecklists { task_id: String },
    ChecklistItems { checklist_id: String },
    DocContent { workspace_id: String, doc_id: String },
    WorkspaceSpaces { workspace_id: String },
    Space { space_id: String },
    SpaceFolders { space_id: String },
    Folder { folder_id: String },
    FolderLists { folder_id: String },
    SpaceLists { space_id: String },
    List { list_id: String },
}

#[derive(Debug)]
pub(crate) struct TemplateDef {
    pub template: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
    build: fn(Vec<String>) -> ResourceRoute,
}

fn defs() -> Vec<TemplateDef> {
    vec![
        TemplateDef {
            template: "clickup://task/{task_id}",
            name: "task-details",
            description: "Details of a task",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::Task { task_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://task/{task_id}/comments",
            name: "task-comments",
            description: "Comments on a task",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::TaskComments { task_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://view/{view_id}/comments",
            name: "chat-view-comments",
            description: "Comments of a chat view",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::ViewComments { view_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://list/{list_id}/comments",
            name: "list-comments",
            description: "Comments on a list",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::ListComments { list_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://comment/{comment_id}/reply",
            name: "threaded-comments",
            description: "Threaded replies to a comment",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::ThreadedComments { comment_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://task/{task_id}/checklist",
            name: "task-checklists",
            description: "Checklists of a task",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::TaskChecklists { task_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://checklist/{checklist_id}/items",
            name: "checklist-items",
            description: "Items of a checklist",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::ChecklistItems { checklist_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://workspace/{workspace_id}/doc/{doc_id}",
            name: "doc-content",
            description: "Combined content of every page of a doc",
            mime_type: MIME_MARKDOWN,
            build: |mut v| ResourceRoute::DocContent {
                workspace_id: v.remove(0),
                doc_id: v.remove(0),
            },
        },
        TemplateDef {
            template: "clickup://workspace/{workspace_id}/spaces",
            name: "workspace-spaces",
            description: "Spaces of a workspace",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::WorkspaceSpaces { workspace_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://space/{space_id}",
            name: "space-details",
            description: "Details of a space",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::Space { space_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://space/{space_id}/folders",
            name: "space-folders",
            description: "Folders of a space",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::SpaceFolders { space_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://folder/{folder_id}",
            name: "folder-details",
            description: "Details of a folder",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::Folder { folder_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://folder/{folder_id}/lists",
            name: "folder-lists",
            description: "Lists in a folder",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::FolderLists { folder_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://space/{space_id}/lists",
            name: "space-lists",
            description: "Folderless lists of a space",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::SpaceLists { space_id: v.remove(0) },
        },
        TemplateDef {
            template: "clickup://list/{list_id}",
            name: "list-details",
            description: "Details of a list",
            mime_type: MIME_JSON,
            build: |mut v| ResourceRoute::List { list_id: v.remove(0) },
        },
    ]
}

/// Example URIs returned by `resources/list` for discoverability, in
/// addition to the templates.
pub(crate) const STATIC_RESOURCES: &[(&str, &str, &str)] = &[
    ("clickup://workspace/9011839976/doc/8cjbgz8-911", "example-doc", "Content of an example doc"),
    ("clickup://space/90113637923/folders", "example-space-folders", "Folders of an example space"),
    ("clickup://folder/90115795569", "example-folder", "Details of an example folder"),
    ("clickup://list/901109776097", "example-list", "Details of an example list"),
    ("clickup://folder/90115795569/lists", "example-folder-lists", "Lists in an example folder"),
    ("clickup://space/90113637923/lists", "example-space-lists", "Folderless lists of an example space"),
    ("clickup://workspace/9011839976/spaces", "example-workspace-spaces", "Spaces of an example workspace"),
    ("clickup://space/90113637923", "example-space", "Details of an example space"),
    ("clickup://task/868czp2t3/comments", "example-task-comments", "Comments on an example task"),
    ("clickup://list/901109776097/comments", "example-list-comments", "Comments on an example list"),
    ("clickup://comment/90110125009748/reply", "example-threaded-comments", "Replies to an example comment"),
    ("clickup://view/123456/comments", "example-chat-view-comments", "Comments of an example chat view"),
];

#[derive(Debug)]
struct CompiledRoute {
    def: TemplateDef,
    regex: Regex,
}

pub(crate) struct RouteMatch {
    pub route: ResourceRoute,
    pub mime_type: &'static str,
}

#[derive(Debug)]
pub struct ResourceRouter {
    routes: Vec<CompiledRoute>,
}

impl ResourceRouter {
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_defs(defs())
    }

    fn with_defs(defs: Vec<TemplateDef>) -> Result<Self, RegistryError> {
        let mut routes = Vec::with_capacity(defs.len());
        for def in defs {
            let regex = compile(def.template)?;
            routes.push(CompiledRoute { def, regex });
        }
        // Two templates overlap exactly when they have the same segment
        // count and no position holds two different literals; such a
        // pair admits a URI both would match. Probing one template's
        // regex with the other's literal URI would miss the
        // variable-vs-literal case.
        for (i, route) in routes.iter().enumerate() {
            for other in &routes[i + 1..] {
                if overlaps(route.def.template, other.def.template) {
                    return Err(RegistryError::AmbiguousTemplate {
                        first: route.def.template.to_string(),
                        second: other.def.template.to_string(),
                    });
                }
            }
        }
        Ok(Self { routes })
    }

    /// First matching template wins; construction guarantees at most one
    /// can match.
    pub(crate) fn route(&self, uri: &str) -> Option<RouteMatch> {
        for route in &self.routes {
            if let Some(caps) = route.regex.captures(uri) {
                let vars = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().to_string())
                    .collect();
                return Some(RouteMatch {
                    route: (route.def.build)(vars),
                    mime_type: route.def.mime_type,
                });
            }
        }
        None
    }

    pub(crate) fn template_defs(&self) -> impl Iterator<Item = &TemplateDef> {
        self.routes.iter().map(|r| &r.def)
    }
}

fn compile(template: &str) -> Result<Regex, RegistryError> {
    let mut pattern = String::from("^");
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        pattern.push_str(&regex::escape(&rest[..start]));
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| RegistryError::InvalidTemplate {
                template: template.to_string(),
                message: "unterminated variable".to_string(),
            })?;
        pattern.push_str("([^/]+)");
        rest = &after[end + 1..];
    }
    pattern.push_str(&regex::escape(rest));
    pattern.push('$');
    Regex::new(&pattern).map_err(|e| RegistryError::InvalidTemplate {
        template: template.to_string(),
        message: e.to_string(),
    })
}

/// Whether a URI exists that both templates would match. A segment
/// containing a variable matches anything; two distinct literals at the
/// same position rule the pair out.
fn overlaps(a: &str, b: &str) -> bool {
    let a: Vec<&str> = a.split('/').collect();
    let b: Vec<&str> = b.split('/').collect();
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| x.contains('{') || y.contains('{') || x == y)
}

/// The template with every variable replaced by a literal segment.
#[cfg(test)]
pub(crate) fn probe_uri(template: &str) -> String {
    let mut probe = String::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        probe.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                probe.push_str("probe");
                rest = &after[end + 1..];
            }
            None => {
                rest = "";
            }
        }
    }
    probe.push_str(rest);
    probe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_builtin_catalog_is_unambiguous() {
        assert!(ResourceRouter::new().is_ok());
    }

    #[test]
    fn variables_capture_single_segments() {
        let router = ResourceRouter::new().unwrap();
        let matched = router.route("clickup://task/868czp2t3").unwrap();
        assert_eq!(
            matched.route,
            ResourceRoute::Task {
                task_id: "868czp2t3".to_string()
            }
        );
        assert_eq!(matched.mime_type, MIME_JSON);
        assert!(router.route("clickup://task/a/b/c").is_none());
    }

    #[test]
    fn longer_paths_route_past_the_short_template() {
        let router = ResourceRouter::new().unwrap();
        let matched = router.route("clickup://task/868czp2t3/comments").unwrap();
        assert_eq!(
            matched.route,
            ResourceRoute::TaskComments {
                task_id: "868czp2t3".to_string()
            }
        );
    }

    #[test]
    fn doc_content_extracts_both_variables() {
        let router = ResourceRouter::new().unwrap();
        let matched = router
            .route("clickup://workspace/9011839976/doc/8cjbgz8-911")
            .unwrap();
        assert_eq!(
            matched.route,
            ResourceRoute::DocContent {
                workspace_id: "9011839976".to_string(),
                doc_id: "8cjbgz8-911".to_string(),
            }
        );
        assert_eq!(matched.mime_type, MIME_MARKDOWN);
    }

    #[test]
    fn unknown_uris_do_not_route() {
        let router = ResourceRouter::new().unwrap();
        assert!(router.route("clickup://unknown/123").is_none());
        assert!(router.route("otherscheme://task/123").is_none());
    }

    #[test]
    fn overlapping_templates_fail_construction() {
        let defs = vec![
            TemplateDef {
                template: "clickup://task/{task_id}",
                name: "one",
                description: "",
                mime_type: MIME_JSON,
                build: |mut v| ResourceRoute::Task { task_id: v.remove(0) },
            },
            TemplateDef {
                template: "clickup://task/{anything}",
                name: "two",
                description: "",
                mime_type: MIME_JSON,
                build: |mut v| ResourceRoute::Task { task_id: v.remove(0) },
            },
        ];
        let err = ResourceRouter::with_defs(defs).unwrap_err();
        assert!(matches!(err, RegistryError::AmbiguousTemplate { .. }));
    }

    #[test]
    fn variable_against_literal_overlap_fails_construction() {
        // "clickup://task/868" would match both shapes.
        let defs = vec![
            TemplateDef {
                template: "clickup://task/{task_id}",
                name: "one",
                description: "",
                mime_type: MIME_JSON,
                build: |mut v| ResourceRoute::Task { task_id: v.remove(0) },
            },
            TemplateDef {
                template: "clickup://{kind}/868",
                name: "two",
                description: "",
                mime_type: MIME_JSON,
                build: |mut v| ResourceRoute::Task { task_id: v.remove(0) },
            },
        ];
        let err = ResourceRouter::with_defs(defs).unwrap_err();
        assert!(matches!(err, RegistryError::AmbiguousTemplate { .. }));
    }
}
