//! Descriptors for the providers shipped with the engine.

use super::SubtreeProvider;
use crate::dependencies::domain::{flags, DependencyFlags, Icon, IconSet};

pub const FRAMEWORK: &str = "Framework";
pub const PACKAGE: &str = "Package";
pub const SDK: &str = "Sdk";
pub const PROJECT_REFERENCE: &str = "ProjectReference";
pub const ASSEMBLY: &str = "Assembly";

pub const SDK_REFERENCE_SCHEMA: &str = "SdkReference";
pub const RESOLVED_SDK_REFERENCE_SCHEMA: &str = "ResolvedSdkReference";

/// Project reference property marking a shared (`.projitems`) project.
pub const IS_SHARED_PROJECT_PROPERTY: &str = "IsSharedProject";

fn icon_set(icon: &str, unresolved: &str) -> IconSet {
    IconSet::new(
        Icon::new(icon),
        Icon::new(icon),
        Icon::new(unresolved),
        Icon::new(unresolved),
    )
}

pub fn framework() -> SubtreeProvider {
    SubtreeProvider::new(
        FRAMEWORK,
        "Frameworks",
        icon_set("Framework", "FrameworkWarning"),
        icon_set("Framework", "FrameworkWarning"),
    )
    .with_schemas("FrameworkReference", "ResolvedFrameworkReference")
    .with_node_flags(DependencyFlags::from_iter([flags::FRAMEWORK_DEPENDENCY]))
    .internal(Icon::new("FrameworkPrivate"))
}

pub fn package() -> SubtreeProvider {
    SubtreeProvider::new(
        PACKAGE,
        "Packages",
        icon_set("NuGetGrey", "NuGetGreyWarning"),
        icon_set("NuGetGrey", "NuGetGreyWarning"),
    )
    .with_schemas("PackageReference", "ResolvedPackageReference")
    .with_node_flags(DependencyFlags::from_iter([flags::PACKAGE_DEPENDENCY]))
    .internal(Icon::new("NuGetGreyPrivate"))
}

pub fn sdk() -> SubtreeProvider {
    SubtreeProvider::new(
        SDK,
        "SDK",
        icon_set("Sdk", "SdkWarning"),
        icon_set("Sdk", "SdkWarning"),
    )
    .with_schemas(SDK_REFERENCE_SCHEMA, RESOLVED_SDK_REFERENCE_SCHEMA)
    .with_node_flags(DependencyFlags::from_iter([flags::SDK_DEPENDENCY]))
    .internal(Icon::new("SdkPrivate"))
}

pub fn project_reference() -> SubtreeProvider {
    SubtreeProvider::new(
        PROJECT_REFERENCE,
        "Projects",
        icon_set("Application", "ApplicationWarning"),
        icon_set("Application", "ApplicationWarning"),
    )
    .with_schemas("ProjectReference", "ResolvedProjectReference")
    .with_node_flags(DependencyFlags::from_iter([flags::PROJECT_DEPENDENCY]))
    .with_property_flag(
        IS_SHARED_PROJECT_PROPERTY,
        "true",
        flags::SHARED_PROJECT_DEPENDENCY,
    )
    .internal(Icon::new("ApplicationPrivate"))
}

pub fn assembly() -> SubtreeProvider {
    SubtreeProvider::new(
        ASSEMBLY,
        "Assemblies",
        icon_set("Reference", "ReferenceWarning"),
        icon_set("Reference", "ReferenceWarning"),
    )
    .with_schemas("AssemblyReference", "ResolvedAssemblyReference")
    .with_node_flags(DependencyFlags::from_iter([flags::ASSEMBLY_DEPENDENCY]))
    .internal(Icon::new("ReferencePrivate"))
}

/// All built-in providers, in display order.
pub fn all() -> Vec<SubtreeProvider> {
    vec![framework(), package(), sdk(), project_reference(), assembly()]
}
