use super::flags::{self, DependencyFlags};
use super::{DependencyId, IconSet};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Severity of the diagnostic attached to a dependency node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    #[default]
    None,
    Warning,
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::None => write!(f, "None"),
            DiagnosticLevel::Warning => write!(f, "Warning"),
            DiagnosticLevel::Error => write!(f, "Error"),
        }
    }
}

/// One entry of the dependency graph.
///
/// Nodes are never mutated once built. Every change goes through
/// [`DependencyNode::with_changes`] (or one of its shorthands) which returns a
/// new node with the same [`DependencyId`], so a node already referenced by a
/// published snapshot never changes under its readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNode {
    id: DependencyId,
    caption: String,
    original_item_spec: String,
    resolved: bool,
    implicit: bool,
    flags: DependencyFlags,
    diagnostic_level: DiagnosticLevel,
    icon_set: Arc<IconSet>,
    schema_name: String,
    properties: BTreeMap<String, String>,
}

/// Field replacements applied by [`DependencyNode::with_changes`].
///
/// `None` keeps the current value. Identity fields are deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct NodeChanges {
    pub caption: Option<String>,
    pub resolved: Option<bool>,
    pub implicit: Option<bool>,
    pub flags: Option<DependencyFlags>,
    pub diagnostic_level: Option<DiagnosticLevel>,
    pub icon_set: Option<Arc<IconSet>>,
    pub schema_name: Option<String>,
}

impl DependencyNode {
    pub fn builder(id: DependencyId, icon_set: Arc<IconSet>) -> DependencyNodeBuilder {
        DependencyNodeBuilder::new(id, icon_set)
    }

    pub fn id(&self) -> &DependencyId {
        &self.id
    }

    pub fn provider_type(&self) -> &str {
        self.id.provider_type()
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn original_item_spec(&self) -> &str {
        &self.original_item_spec
    }

    pub fn resolved(&self) -> bool {
        self.resolved
    }

    pub fn implicit(&self) -> bool {
        self.implicit
    }

    pub fn flags(&self) -> &DependencyFlags {
        &self.flags
    }

    pub fn diagnostic_level(&self) -> DiagnosticLevel {
        self.diagnostic_level
    }

    pub fn icon_set(&self) -> &Arc<IconSet> {
        &self.icon_set
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Copy of this node with the given fields replaced.
    pub fn with_changes(&self, changes: NodeChanges) -> Self {
        Self {
            id: self.id.clone(),
            caption: changes.caption.unwrap_or_else(|| self.caption.clone()),
            original_item_spec: self.original_item_spec.clone(),
            resolved: changes.resolved.unwrap_or(self.resolved),
            implicit: changes.implicit.unwrap_or(self.implicit),
            flags: changes.flags.unwrap_or_else(|| self.flags.clone()),
            diagnostic_level: changes.diagnostic_level.unwrap_or(self.diagnostic_level),
            icon_set: changes.icon_set.unwrap_or_else(|| Arc::clone(&self.icon_set)),
            schema_name: changes.schema_name.unwrap_or_else(|| self.schema_name.clone()),
            properties: self.properties.clone(),
        }
    }

    /// Copy of this node flipped to its resolved shape.
    pub fn to_resolved(&self, schema_name: &str, diagnostic_level: DiagnosticLevel) -> Self {
        self.with_changes(NodeChanges {
            resolved: Some(true),
            flags: Some(self.flags.without(flags::UNRESOLVED).with(flags::RESOLVED)),
            schema_name: Some(schema_name.to_string()),
            diagnostic_level: Some(diagnostic_level),
            ..NodeChanges::default()
        })
    }

    /// Copy of this node flipped to its unresolved shape. Inverse of [`Self::to_resolved`].
    pub fn to_unresolved(&self, schema_name: &str, diagnostic_level: DiagnosticLevel) -> Self {
        self.with_changes(NodeChanges {
            resolved: Some(false),
            flags: Some(self.flags.without(flags::RESOLVED).with(flags::UNRESOLVED)),
            schema_name: Some(schema_name.to_string()),
            diagnostic_level: Some(diagnostic_level),
            ..NodeChanges::default()
        })
    }
}

/// Builder for [`DependencyNode`]; validates identity on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct DependencyNodeBuilder {
    id: DependencyId,
    icon_set: Arc<IconSet>,
    caption: Option<String>,
    original_item_spec: String,
    resolved: bool,
    implicit: bool,
    flags: DependencyFlags,
    diagnostic_level: DiagnosticLevel,
    schema_name: String,
    properties: BTreeMap<String, String>,
}

impl DependencyNodeBuilder {
    fn new(id: DependencyId, icon_set: Arc<IconSet>) -> Self {
        Self {
            id,
            icon_set,
            caption: None,
            original_item_spec: String::new(),
            resolved: false,
            implicit: false,
            flags: DependencyFlags::new(),
            diagnostic_level: DiagnosticLevel::None,
            schema_name: String::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn original_item_spec(mut self, original_item_spec: impl Into<String>) -> Self {
        self.original_item_spec = original_item_spec.into();
        self
    }

    pub fn resolved(mut self, resolved: bool) -> Self {
        self.resolved = resolved;
        self
    }

    pub fn implicit(mut self, implicit: bool) -> Self {
        self.implicit = implicit;
        self
    }

    pub fn flags(mut self, flags: DependencyFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn diagnostic_level(mut self, diagnostic_level: DiagnosticLevel) -> Self {
        self.diagnostic_level = diagnostic_level;
        self
    }

    pub fn schema_name(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = schema_name.into();
        self
    }

    pub fn properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    pub fn build(self) -> Result<DependencyNode> {
        if self.id.provider_type().trim().is_empty() {
            anyhow::bail!("Dependency provider type cannot be empty (id: '{}')", self.id.id());
        }
        if self.id.id().trim().is_empty() {
            anyhow::bail!(
                "Dependency id cannot be empty (provider: '{}')",
                self.id.provider_type()
            );
        }

        let caption = self.caption.unwrap_or_else(|| self.id.id().to_string());
        Ok(DependencyNode {
            id: self.id,
            caption,
            original_item_spec: self.original_item_spec,
            resolved: self.resolved,
            implicit: self.implicit,
            flags: self.flags,
            diagnostic_level: self.diagnostic_level,
            icon_set: self.icon_set,
            schema_name: self.schema_name,
            properties: self.properties,
        })
    }
}
