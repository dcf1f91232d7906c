use super::{DependencyFlags, Icon, IconSet};
use serde::Serialize;
use std::sync::Arc;

/// Synthetic root node grouping all dependencies of one provider type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyGroup {
    provider_type: String,
    caption: String,
    icon_set: Arc<IconSet>,
    flags: DependencyFlags,
    has_unresolved: bool,
}

impl DependencyGroup {
    pub fn new(
        provider_type: impl Into<String>,
        caption: impl Into<String>,
        icon_set: Arc<IconSet>,
        flags: DependencyFlags,
        has_unresolved: bool,
    ) -> Self {
        Self {
            provider_type: provider_type.into(),
            caption: caption.into(),
            icon_set,
            flags,
            has_unresolved,
        }
    }

    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn icon_set(&self) -> &Arc<IconSet> {
        &self.icon_set
    }

    pub fn flags(&self) -> &DependencyFlags {
        &self.flags
    }

    /// True when at least one dependency in the group is unresolved.
    pub fn has_unresolved(&self) -> bool {
        self.has_unresolved
    }

    pub fn current_icon(&self) -> &Icon {
        if self.has_unresolved {
            self.icon_set.unresolved_icon()
        } else {
            self.icon_set.icon()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(has_unresolved: bool) -> DependencyGroup {
        DependencyGroup::new(
            "Package",
            "Packages",
            Arc::new(IconSet::new(
                Icon::new("PackageGroup"),
                Icon::new("PackageGroup"),
                Icon::new("PackageGroupWarning"),
                Icon::new("PackageGroupWarning"),
            )),
            DependencyFlags::new(),
            has_unresolved,
        )
    }

    #[test]
    fn test_current_icon_resolved() {
        assert_eq!(group(false).current_icon().as_str(), "PackageGroup");
    }

    #[test]
    fn test_current_icon_unresolved() {
        assert_eq!(group(true).current_icon().as_str(), "PackageGroupWarning");
    }
}
