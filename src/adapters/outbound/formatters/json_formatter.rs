use crate::dependencies::domain::{DependencyNode, DependencySnapshot, DiagnosticLevel};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct Document<'a> {
    tool: Tool,
    snapshots: Vec<SnapshotView<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct SnapshotView<'a> {
    scope: &'a str,
    version: u64,
    #[serde(rename = "publishedAt")]
    published_at: String,
    #[serde(rename = "hasUnresolved")]
    has_unresolved: bool,
    groups: Vec<GroupView<'a>>,
}

#[derive(Debug, Serialize)]
struct GroupView<'a> {
    provider: &'a str,
    caption: &'a str,
    icon: &'a str,
    #[serde(rename = "hasUnresolved")]
    has_unresolved: bool,
    dependencies: Vec<NodeView<'a>>,
}

#[derive(Debug, Serialize)]
struct NodeView<'a> {
    id: &'a str,
    caption: &'a str,
    resolved: bool,
    implicit: bool,
    #[serde(rename = "diagnosticLevel")]
    diagnostic_level: DiagnosticLevel,
    schema: &'a str,
    flags: Vec<&'a str>,
    #[serde(rename = "originalItemSpec", skip_serializing_if = "is_empty_str")]
    original_item_spec: &'a str,
    #[serde(skip_serializing_if = "is_empty_map")]
    properties: &'a BTreeMap<String, String>,
}

fn is_empty_str(value: &&str) -> bool {
    value.is_empty()
}

fn is_empty_map(map: &&BTreeMap<String, String>) -> bool {
    map.is_empty()
}

impl<'a> From<&'a DependencyNode> for NodeView<'a> {
    fn from(node: &'a DependencyNode) -> Self {
        Self {
            id: node.id().id(),
            caption: node.caption(),
            resolved: node.resolved(),
            implicit: node.implicit(),
            diagnostic_level: node.diagnostic_level(),
            schema: node.schema_name(),
            flags: node.flags().iter().collect(),
            original_item_spec: node.original_item_spec(),
            properties: node.properties(),
        }
    }
}

/// JsonSnapshotFormatter adapter rendering snapshots as one JSON document
///
/// Dependencies are nested under their provider group, in id order.
pub struct JsonSnapshotFormatter;

impl JsonSnapshotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_snapshot(snapshot: &DependencySnapshot) -> SnapshotView<'_> {
        let groups = snapshot
            .groups()
            .iter()
            .map(|group| GroupView {
                provider: group.provider_type(),
                caption: group.caption(),
                icon: group.current_icon().as_str(),
                has_unresolved: group.has_unresolved(),
                dependencies: snapshot
                    .dependencies_of(group.provider_type())
                    .map(|node| NodeView::from(node.as_ref()))
                    .collect(),
            })
            .collect();

        SnapshotView {
            scope: snapshot.scope().as_str(),
            version: snapshot.version(),
            published_at: snapshot.published_at().to_rfc3339(),
            has_unresolved: snapshot.has_unresolved_dependency(),
            groups,
        }
    }
}

impl Default for JsonSnapshotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for JsonSnapshotFormatter {
    fn format(&self, snapshots: &[Arc<DependencySnapshot>]) -> Result<String> {
        let document = Document {
            tool: Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            snapshots: snapshots
                .iter()
                .map(|snapshot| Self::build_snapshot(snapshot))
                .collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::domain::{DependencyModel, ScopeId};
    use crate::dependencies::providers::{builtin, ProviderRegistry};
    use crate::dependencies::services::{IconSetCache, SnapshotBuilder};
    use serde_json::Value;

    fn snapshot() -> Arc<DependencySnapshot> {
        let cache = IconSetCache::new();
        let providers = ProviderRegistry::with_builtin_providers();
        let scope = ScopeId::new("net8.0");
        let mut builder = SnapshotBuilder::new(Arc::new(DependencySnapshot::empty(scope.clone())));
        for model in [
            DependencyModel::new(builtin::PACKAGE, "Newtonsoft.Json", true)
                .with_original_item_spec("Newtonsoft.Json"),
            DependencyModel::new(builtin::SDK, "Microsoft.NET.Sdk.Web", false),
        ] {
            let provider = providers.get(&model.provider_type).unwrap();
            builder.add_or_update(provider.create_node(&model, &cache).unwrap());
        }
        Arc::new(builder.build(scope, 3, &providers, &cache))
    }

    #[test]
    fn test_json_document_structure() {
        let output = JsonSnapshotFormatter::new().format(&[snapshot()]).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["tool"]["name"], "depsnap");
        let snapshot = &json["snapshots"][0];
        assert_eq!(snapshot["scope"], "net8.0");
        assert_eq!(snapshot["version"], 3);
        assert_eq!(snapshot["hasUnresolved"], true);

        let groups = snapshot["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 2);
        let package_group = groups
            .iter()
            .find(|group| group["provider"] == "Package")
            .unwrap();
        let package = &package_group["dependencies"][0];
        assert_eq!(package["id"], "Newtonsoft.Json");
        assert_eq!(package["diagnosticLevel"], "None");
        assert_eq!(package["originalItemSpec"], "Newtonsoft.Json");
        assert!(package.get("properties").is_none());

        let sdk_group = groups.iter().find(|group| group["provider"] == "Sdk").unwrap();
        assert_eq!(sdk_group["hasUnresolved"], true);
        assert_eq!(sdk_group["dependencies"][0]["diagnosticLevel"], "Warning");
        assert!(sdk_group["dependencies"][0].get("originalItemSpec").is_none());
    }

    #[test]
    fn test_empty_input() {
        let output = JsonSnapshotFormatter::new().format(&[]).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["snapshots"].as_array().unwrap().len(), 0);
    }
}
