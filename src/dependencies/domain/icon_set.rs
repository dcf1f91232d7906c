use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a visual icon, e.g. a named image moniker known to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four icons a dependency node can show.
///
/// Instances handed out by [`IconSetCache`](crate::dependencies::services::IconSetCache)
/// are shared; compare with `Arc::ptr_eq` to check interning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconSet {
    icon: Icon,
    expanded_icon: Icon,
    unresolved_icon: Icon,
    unresolved_expanded_icon: Icon,
}

impl IconSet {
    pub fn new(
        icon: Icon,
        expanded_icon: Icon,
        unresolved_icon: Icon,
        unresolved_expanded_icon: Icon,
    ) -> Self {
        Self {
            icon,
            expanded_icon,
            unresolved_icon,
            unresolved_expanded_icon,
        }
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn expanded_icon(&self) -> &Icon {
        &self.expanded_icon
    }

    pub fn unresolved_icon(&self) -> &Icon {
        &self.unresolved_icon
    }

    pub fn unresolved_expanded_icon(&self) -> &Icon {
        &self.unresolved_expanded_icon
    }
}
