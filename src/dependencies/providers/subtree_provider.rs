use crate::dependencies::domain::{
    flags, DependencyFlags, DependencyGroup, DependencyId, DependencyModel, DependencyNode,
    DiagnosticLevel, Icon, IconSet,
};
use crate::dependencies::services::IconSetCache;
use crate::shared::Result;

/// What a provider supports beyond producing nodes.
///
/// Decided once when the provider is registered, so filters branch on a tag
/// instead of probing the provider per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCapability {
    /// Provider shipped with the engine; its explicit dependencies may be
    /// reclassified as implicit and shown with `implicit_icon`.
    Internal { implicit_icon: Icon },
    /// Third-party provider; its nodes are never reclassified.
    External,
}

/// Describes one dependency provider: how its group node looks and how raw
/// [`DependencyModel`]s become [`DependencyNode`]s.
#[derive(Debug, Clone)]
pub struct SubtreeProvider {
    provider_type: String,
    group_caption: String,
    group_icons: IconSet,
    group_flags: DependencyFlags,
    node_icons: IconSet,
    node_flags: DependencyFlags,
    property_flags: Vec<PropertyFlag>,
    unresolved_schema: String,
    resolved_schema: String,
    capability: ProviderCapability,
}

/// Flag added to a node when one of its properties has a given value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PropertyFlag {
    key: String,
    value: String,
    flag: String,
}

impl SubtreeProvider {
    /// Creates an external provider descriptor.
    ///
    /// # Arguments
    /// * `provider_type` - Provider type string used in every [`DependencyId`]
    /// * `group_caption` - Display name of the provider's group node
    /// * `group_icons` - Icons of the group node
    /// * `node_icons` - Icons of the dependency nodes
    pub fn new(
        provider_type: impl Into<String>,
        group_caption: impl Into<String>,
        group_icons: IconSet,
        node_icons: IconSet,
    ) -> Self {
        let provider_type = provider_type.into();
        Self {
            unresolved_schema: format!("{}Reference", provider_type),
            resolved_schema: format!("Resolved{}Reference", provider_type),
            provider_type,
            group_caption: group_caption.into(),
            group_icons,
            group_flags: DependencyFlags::from_iter([flags::DEPENDENCY_GROUP]),
            node_icons,
            node_flags: DependencyFlags::new(),
            property_flags: Vec::new(),
            capability: ProviderCapability::External,
        }
    }

    pub fn with_schemas(
        mut self,
        unresolved_schema: impl Into<String>,
        resolved_schema: impl Into<String>,
    ) -> Self {
        self.unresolved_schema = unresolved_schema.into();
        self.resolved_schema = resolved_schema.into();
        self
    }

    /// Adds flags carried by every node of this provider.
    pub fn with_node_flags(mut self, node_flags: DependencyFlags) -> Self {
        self.node_flags = self.node_flags.union(&node_flags);
        self
    }

    /// Adds `flag` to nodes whose property `key` equals `value` (case-insensitive).
    pub fn with_property_flag(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flag: &str,
    ) -> Self {
        self.property_flags.push(PropertyFlag {
            key: key.into(),
            value: value.into(),
            flag: flag.to_string(),
        });
        self
    }

    pub fn with_group_flags(mut self, group_flags: DependencyFlags) -> Self {
        self.group_flags = self.group_flags.union(&group_flags);
        self
    }

    /// Marks the provider as internal, which enables implicit reclassification.
    pub fn internal(mut self, implicit_icon: Icon) -> Self {
        self.capability = ProviderCapability::Internal { implicit_icon };
        self
    }

    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    pub fn group_caption(&self) -> &str {
        &self.group_caption
    }

    pub fn capability(&self) -> &ProviderCapability {
        &self.capability
    }

    /// Implicit icon, present only for internal providers.
    pub fn implicit_icon(&self) -> Option<&Icon> {
        match &self.capability {
            ProviderCapability::Internal { implicit_icon } => Some(implicit_icon),
            ProviderCapability::External => None,
        }
    }

    pub fn unresolved_schema(&self) -> &str {
        &self.unresolved_schema
    }

    pub fn resolved_schema(&self) -> &str {
        &self.resolved_schema
    }

    /// Shapes a raw provider request into a node.
    ///
    /// Resolved nodes carry no diagnostic; unresolved ones start at `Warning`.
    /// Explicit nodes are removable. Implicit nodes of internal providers show
    /// the implicit icon in both resolved slots.
    ///
    /// # Errors
    /// Returns an error if the model's provider type does not match this
    /// provider, or its id is empty.
    pub fn create_node(
        &self,
        model: &DependencyModel,
        icon_cache: &IconSetCache,
    ) -> Result<DependencyNode> {
        if model.provider_type != self.provider_type {
            anyhow::bail!(
                "Provider '{}' cannot create a node for provider type '{}'",
                self.provider_type,
                model.provider_type
            );
        }

        let mut node_flags = self
            .node_flags
            .with(flags::DEPENDENCY)
            .with(if model.resolved {
                flags::RESOLVED
            } else {
                flags::UNRESOLVED
            });
        if !model.implicit {
            node_flags = node_flags.with(flags::SUPPORTS_REMOVE);
        }
        for rule in &self.property_flags {
            let matches = model
                .properties
                .get(&rule.key)
                .is_some_and(|value| value.eq_ignore_ascii_case(&rule.value));
            if matches {
                node_flags = node_flags.with(&rule.flag);
            }
        }

        let icon_set = match (model.implicit, self.implicit_icon()) {
            (true, Some(implicit_icon)) => icon_cache.get_or_add_icon_set(
                implicit_icon.clone(),
                implicit_icon.clone(),
                self.node_icons.unresolved_icon().clone(),
                self.node_icons.unresolved_expanded_icon().clone(),
            ),
            _ => icon_cache.intern(self.node_icons.clone()),
        };

        let (schema_name, diagnostic_level) = if model.resolved {
            (&self.resolved_schema, DiagnosticLevel::None)
        } else {
            (&self.unresolved_schema, DiagnosticLevel::Warning)
        };

        let mut builder = DependencyNode::builder(
            DependencyId::new(self.provider_type.clone(), model.id.clone()),
            icon_set,
        )
        .original_item_spec(model.original_item_spec.clone())
        .resolved(model.resolved)
        .implicit(model.implicit)
        .flags(node_flags)
        .diagnostic_level(diagnostic_level)
        .schema_name(schema_name.clone())
        .properties(model.properties.clone());
        if let Some(caption) = &model.caption {
            builder = builder.caption(caption.clone());
        }
        builder.build()
    }

    /// Builds this provider's group node.
    pub fn create_group(&self, has_unresolved: bool, icon_cache: &IconSetCache) -> DependencyGroup {
        DependencyGroup::new(
            self.provider_type.clone(),
            self.group_caption.clone(),
            icon_cache.intern(self.group_icons.clone()),
            self.group_flags.clone(),
            has_unresolved,
        )
    }
}
