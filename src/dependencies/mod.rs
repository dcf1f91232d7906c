//! Dependency snapshot engine core: value types, the filter pipeline, the
//! built-in cross-provider filters and provider descriptors.
pub mod domain;
pub mod filters;
pub mod providers;
pub mod services;
