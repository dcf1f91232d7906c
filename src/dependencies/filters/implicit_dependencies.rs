use crate::dependencies::domain::{flags, DependencyNode, Icon, NodeChanges};
use crate::dependencies::providers::ProviderRegistry;
use crate::dependencies::services::{
    AddDependencyContext, DependenciesSnapshotFilter, IconSetCache,
};
use crate::shared::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Changes explicit, resolved dependencies to implicit when their original item
/// spec is not among the item specs the project evaluation declared.
///
/// Only applies to dependencies of internal providers. Shared project
/// references are never reclassified.
pub struct ImplicitDependenciesFilter {
    icon_cache: Arc<IconSetCache>,
}

impl ImplicitDependenciesFilter {
    pub const NAME: &'static str = "implicit-dependencies";
    pub const ORDER: i32 = 130;

    pub fn new(icon_cache: Arc<IconSetCache>) -> Self {
        Self { icon_cache }
    }

    fn is_undeclared_explicit(dependency: &DependencyNode, known_item_specs: &HashSet<String>) -> bool {
        !dependency.original_item_spec().is_empty()
            && !dependency.implicit()
            && dependency.resolved()
            && dependency.flags().contains(flags::DEPENDENCY)
            && !dependency.flags().contains(flags::SHARED_PROJECT_DEPENDENCY)
            && !known_item_specs.contains(dependency.original_item_spec())
    }
}

impl DependenciesSnapshotFilter for ImplicitDependenciesFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn order(&self) -> i32 {
        Self::ORDER
    }

    fn before_add_or_update(
        &self,
        dependency: DependencyNode,
        providers: &ProviderRegistry,
        known_item_specs: Option<&HashSet<String>>,
        context: &mut AddDependencyContext<'_>,
    ) -> Result<()> {
        let implicit_icon: Option<&Icon> = match known_item_specs {
            Some(known) if Self::is_undeclared_explicit(&dependency, known) => providers
                .get(dependency.provider_type())
                .and_then(|provider| provider.implicit_icon()),
            _ => None,
        };

        let Some(implicit_icon) = implicit_icon else {
            context.accept(dependency);
            return Ok(());
        };

        let implicit_icon_set = self.icon_cache.get_or_add_icon_set(
            implicit_icon.clone(),
            implicit_icon.clone(),
            dependency.icon_set().unresolved_icon().clone(),
            dependency.icon_set().unresolved_expanded_icon().clone(),
        );

        context.accept(dependency.with_changes(NodeChanges {
            icon_set: Some(implicit_icon_set),
            implicit: Some(true),
            flags: Some(dependency.flags().without(flags::SUPPORTS_REMOVE)),
            ..NodeChanges::default()
        }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependencies::domain::{DependencyId, DependencyModel, DependencySnapshot, ScopeId};
    use crate::dependencies::providers::{builtin, SubtreeProvider};
    use crate::dependencies::services::{FilterPipeline, SnapshotBuilder};
    use crate::dependencies::domain::IconSet;

    struct Fixture {
        cache: Arc<IconSetCache>,
        providers: ProviderRegistry,
        pipeline: FilterPipeline,
    }

    impl Fixture {
        fn new() -> Self {
            let cache = Arc::new(IconSetCache::new());
            let mut providers = ProviderRegistry::with_builtin_providers();
            let icons = IconSet::new(Icon::new("Com"), Icon::new("Com"), Icon::new("ComW"), Icon::new("ComW"));
            providers
                .register(SubtreeProvider::new("Com", "COM", icons.clone(), icons))
                .unwrap();
            let pipeline = FilterPipeline::new()
                .with_filter(Arc::new(ImplicitDependenciesFilter::new(Arc::clone(&cache))));
            Self {
                cache,
                providers,
                pipeline,
            }
        }

        fn node(&self, model: DependencyModel) -> DependencyNode {
            self.providers
                .get(&model.provider_type)
                .unwrap()
                .create_node(&model, &self.cache)
                .unwrap()
        }

        fn run(&self, node: DependencyNode, known: Option<&HashSet<String>>) -> Arc<DependencyNode> {
            let id = node.id().clone();
            let mut builder =
                SnapshotBuilder::new(Arc::new(DependencySnapshot::empty(ScopeId::new("s"))));
            self.pipeline
                .run_add_or_update(node, &self.providers, known, &mut builder)
                .unwrap();
            builder.try_get_dependency(&id).unwrap()
        }
    }

    fn known(specs: &[&str]) -> HashSet<String> {
        specs.iter().map(|s| s.to_string()).collect()
    }

    fn explicit_package(id: &str) -> DependencyModel {
        DependencyModel::new(builtin::PACKAGE, id, true).with_original_item_spec(id)
    }

    #[test]
    fn test_undeclared_explicit_dependency_becomes_implicit() {
        let f = Fixture::new();
        let node = f.node(explicit_package("Microsoft.NETCore.App.Ref"));
        let original_icons = Arc::clone(node.icon_set());

        let result = f.run(node, Some(&known(&["Newtonsoft.Json"])));

        assert!(result.implicit());
        assert!(!result.flags().contains(flags::SUPPORTS_REMOVE));
        assert_eq!(result.icon_set().icon().as_str(), "NuGetGreyPrivate");
        assert_eq!(result.icon_set().expanded_icon().as_str(), "NuGetGreyPrivate");
        assert_eq!(result.icon_set().unresolved_icon(), original_icons.unresolved_icon());
        assert_eq!(
            result.icon_set().unresolved_expanded_icon(),
            original_icons.unresolved_expanded_icon()
        );
    }

    #[test]
    fn test_declared_dependency_passes_through() {
        let f = Fixture::new();
        let node = f.node(explicit_package("Newtonsoft.Json"));
        let result = f.run(node.clone(), Some(&known(&["Newtonsoft.Json"])));
        assert_eq!(*result, node);
    }

    #[test]
    fn test_without_known_item_specs_nothing_changes() {
        let f = Fixture::new();
        let node = f.node(explicit_package("Serilog"));
        let result = f.run(node.clone(), None);
        assert_eq!(*result, node);
    }

    #[test]
    fn test_unresolved_dependency_passes_through() {
        let f = Fixture::new();
        let node = f.node(DependencyModel::new(builtin::PACKAGE, "Missing", false).with_original_item_spec("Missing"));
        let result = f.run(node.clone(), Some(&known(&[])));
        assert_eq!(*result, node);
    }

    #[test]
    fn test_empty_item_spec_passes_through() {
        let f = Fixture::new();
        let node = f.node(DependencyModel::new(builtin::PACKAGE, "NoSpec", true));
        let result = f.run(node.clone(), Some(&known(&[])));
        assert_eq!(*result, node);
    }

    #[test]
    fn test_shared_project_is_not_reclassified() {
        let f = Fixture::new();
        let node = f.node(
            DependencyModel::new(builtin::PROJECT_REFERENCE, "Shared.projitems", true)
                .with_original_item_spec("..\\Shared\\Shared.projitems")
                .with_property(builtin::IS_SHARED_PROJECT_PROPERTY, "true"),
        );
        let result = f.run(node.clone(), Some(&known(&[])));
        assert!(!result.implicit());
        assert!(result.flags().contains(flags::SUPPORTS_REMOVE));
    }

    #[test]
    fn test_external_provider_is_not_reclassified() {
        let f = Fixture::new();
        let node = f.node(DependencyModel::new("Com", "stdole", true).with_original_item_spec("stdole"));
        let result = f.run(node.clone(), Some(&known(&[])));
        assert_eq!(*result, node);
    }

    #[test]
    fn test_reclassification_is_idempotent() {
        let f = Fixture::new();
        let specs = known(&[]);
        let once = f.run(f.node(explicit_package("Implicit.Pkg")), Some(&specs));
        let twice = f.run((*once).clone(), Some(&specs));

        assert_eq!(*twice, *once);
        assert!(Arc::ptr_eq(once.icon_set(), twice.icon_set()));
    }

    #[test]
    fn test_implicit_icon_sets_are_shared() {
        let f = Fixture::new();
        let specs = known(&[]);
        let a = f.run(f.node(explicit_package("A")), Some(&specs));
        let b = f.run(f.node(explicit_package("B")), Some(&specs));
        assert!(Arc::ptr_eq(a.icon_set(), b.icon_set()));
        assert_eq!(a.id(), &DependencyId::new(builtin::PACKAGE, "A"));
    }
}
