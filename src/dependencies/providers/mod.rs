pub mod builtin;
mod registry;
mod subtree_provider;

pub use registry::ProviderRegistry;
pub use subtree_provider::{ProviderCapability, SubtreeProvider};
