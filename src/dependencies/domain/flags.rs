use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Marks every node produced by a dependency provider.
pub const DEPENDENCY: &str = "Dependency";
pub const RESOLVED: &str = "Resolved";
pub const UNRESOLVED: &str = "Unresolved";
pub const SUPPORTS_REMOVE: &str = "SupportsRemove";
pub const FRAMEWORK_DEPENDENCY: &str = "FrameworkDependency";
pub const PACKAGE_DEPENDENCY: &str = "PackageDependency";
pub const SDK_DEPENDENCY: &str = "SdkDependency";
pub const PROJECT_DEPENDENCY: &str = "ProjectDependency";
pub const SHARED_PROJECT_DEPENDENCY: &str = "SharedProjectDependency";
pub const ASSEMBLY_DEPENDENCY: &str = "AssemblyDependency";
pub const DEPENDENCY_GROUP: &str = "DependencyGroup";

/// Unordered set of capability/category tags carried by a node.
///
/// Backed by a `BTreeSet` so equal sets compare, hash and serialize identically
/// regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyFlags(BTreeSet<String>);

impl DependencyFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    /// Returns a copy with `flag` added.
    pub fn with(&self, flag: &str) -> Self {
        let mut flags = self.clone();
        flags.0.insert(flag.to_string());
        flags
    }

    /// Returns a copy with `flag` removed.
    pub fn without(&self, flag: &str) -> Self {
        let mut flags = self.clone();
        flags.0.remove(flag);
        flags
    }

    pub fn union(&self, other: &DependencyFlags) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for DependencyFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_and_without_do_not_mutate_original() {
        let flags = DependencyFlags::from_iter([DEPENDENCY, SUPPORTS_REMOVE]);
        let stripped = flags.without(SUPPORTS_REMOVE);
        let extended = flags.with(SDK_DEPENDENCY);

        assert!(flags.contains(SUPPORTS_REMOVE));
        assert!(!flags.contains(SDK_DEPENDENCY));
        assert!(!stripped.contains(SUPPORTS_REMOVE));
        assert!(extended.contains(SDK_DEPENDENCY));
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let a = DependencyFlags::from_iter([RESOLVED, DEPENDENCY]);
        let b = DependencyFlags::from_iter([DEPENDENCY, RESOLVED]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_union() {
        let a = DependencyFlags::from_iter([DEPENDENCY]);
        let b = DependencyFlags::from_iter([PACKAGE_DEPENDENCY, DEPENDENCY]);
        let u = a.union(&b);
        assert_eq!(u.len(), 2);
        assert!(u.contains(PACKAGE_DEPENDENCY));
    }

    #[test]
    fn test_without_missing_flag_is_noop() {
        let flags = DependencyFlags::from_iter([DEPENDENCY]);
        assert_eq!(flags.without(SUPPORTS_REMOVE), flags);
    }
}
