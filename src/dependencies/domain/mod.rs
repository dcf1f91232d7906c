pub mod dependency_group;
pub mod dependency_id;
pub mod dependency_model;
pub mod dependency_node;
pub mod flags;
pub mod icon_set;
pub mod scope_id;
pub mod snapshot;

pub use dependency_group::DependencyGroup;
pub use dependency_id::DependencyId;
pub use dependency_model::DependencyModel;
pub use dependency_node::{DependencyNode, DependencyNodeBuilder, DiagnosticLevel, NodeChanges};
pub use flags::DependencyFlags;
pub use icon_set::{Icon, IconSet};
pub use scope_id::ScopeId;
pub use snapshot::DependencySnapshot;
