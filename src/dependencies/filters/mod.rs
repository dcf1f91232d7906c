//! Built-in pipeline stages encoding cross-provider invariants.
mod implicit_dependencies;
mod sdk_and_packages;

pub use implicit_dependencies::ImplicitDependenciesFilter;
pub use sdk_and_packages::SdkAndPackagesFilter;
