use crate::dependencies::domain::{flags, DependencyId, DependencyNode, DiagnosticLevel};
use crate::dependencies::providers::{builtin, ProviderRegistry};
use crate::dependencies::services::{
    AddDependencyContext, DependenciesSnapshotFilter, RemoveDependencyContext,
};
use crate::shared::Result;
use std::collections::HashSet;

/// Keeps SDK references in sync with the package that actually supplies them.
///
/// SDK nodes come from design-time build data without full resolution
/// fidelity; an SDK is resolved exactly when a resolved package of the same id
/// exists. Influence only flows from package to SDK: a package node is never
/// created from an SDK node.
pub struct SdkAndPackagesFilter;

impl SdkAndPackagesFilter {
    pub const NAME: &'static str = "sdk-and-packages";
    pub const ORDER: i32 = 110;

    pub fn new() -> Self {
        Self
    }
}

impl Default for SdkAndPackagesFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependenciesSnapshotFilter for SdkAndPackagesFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn order(&self) -> i32 {
        Self::ORDER
    }

    fn before_add_or_update(
        &self,
        dependency: DependencyNode,
        _providers: &ProviderRegistry,
        _known_item_specs: Option<&HashSet<String>>,
        context: &mut AddDependencyContext<'_>,
    ) -> Result<()> {
        if dependency.flags().contains(flags::SDK_DEPENDENCY) {
            let package_id = DependencyId::new(builtin::PACKAGE, dependency.id().id());
            let package_resolved = context
                .try_get_dependency(&package_id)
                .is_some_and(|package| package.resolved());

            if package_resolved {
                context.accept(dependency.to_resolved(
                    builtin::RESOLVED_SDK_REFERENCE_SCHEMA,
                    DiagnosticLevel::None,
                ));
                return Ok(());
            }
        } else if dependency.flags().contains(flags::PACKAGE_DEPENDENCY) && dependency.resolved() {
            // Package arrived after its SDK node
            let sdk_id = DependencyId::new(builtin::SDK, dependency.id().id());
            if let Some(sdk) = context.try_get_dependency(&sdk_id) {
                context.add_or_update(
                    sdk.to_resolved(builtin::RESOLVED_SDK_REFERENCE_SCHEMA, DiagnosticLevel::None),
                );
            }
        }

        context.accept(dependency);
        Ok(())
    }

    fn before_remove(
        &self,
        dependency: &DependencyNode,
        context: &mut RemoveDependencyContext<'_>,
    ) -> Result<()> {
        if dependency.resolved() && dependency.flags().contains(flags::PACKAGE_DEPENDENCY) {
            let sdk_id = DependencyId::new(builtin::SDK, dependency.id().id());
            if let Some(sdk) = context.try_get_dependency(&sdk_id) {
                // Undo the add-path side effect and reinstate the warning
                context.add_or_update(
                    sdk.to_unresolved(builtin::SDK_REFERENCE_SCHEMA, DiagnosticLevel::Warning),
                );
            }
        }

        context.accept();
        Ok(())
    }
}
