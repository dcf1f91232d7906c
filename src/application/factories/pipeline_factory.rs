use crate::dependencies::filters::{ImplicitDependenciesFilter, SdkAndPackagesFilter};
use crate::dependencies::services::{FilterPipeline, IconSetCache};
use crate::shared::Result;
use std::sync::Arc;

/// Builds the default filter pipeline, minus any filters disabled by name.
pub struct PipelineFactory;

impl PipelineFactory {
    /// Names of the built-in filters, in execution order.
    pub const BUILTIN_FILTERS: [&'static str; 2] =
        [SdkAndPackagesFilter::NAME, ImplicitDependenciesFilter::NAME];

    /// Creates the pipeline with every built-in filter not listed in `disabled`.
    ///
    /// # Errors
    /// Returns an error if `disabled` names a filter that does not exist, so a
    /// typo in configuration is not silently ignored.
    ///
    /// # Examples
    /// ```
    /// use depsnap::application::factories::PipelineFactory;
    /// use depsnap::dependencies::services::IconSetCache;
    /// use std::sync::Arc;
    ///
    /// let pipeline = PipelineFactory::create(Arc::new(IconSetCache::new()), &[]).unwrap();
    /// assert_eq!(pipeline.names(), vec!["sdk-and-packages", "implicit-dependencies"]);
    /// ```
    pub fn create(icon_cache: Arc<IconSetCache>, disabled: &[String]) -> Result<FilterPipeline> {
        if let Some(unknown) = disabled
            .iter()
            .find(|name| !Self::BUILTIN_FILTERS.contains(&name.as_str()))
        {
            anyhow::bail!(
                "Unknown filter '{}'. Available filters: {}",
                unknown,
                Self::BUILTIN_FILTERS.join(", ")
            );
        }
        let enabled = |name: &str| !disabled.iter().any(|d| d == name);

        let mut pipeline = FilterPipeline::new();
        if enabled(ImplicitDependenciesFilter::NAME) {
            pipeline.register(Arc::new(ImplicitDependenciesFilter::new(icon_cache)));
        }
        if enabled(SdkAndPackagesFilter::NAME) {
            pipeline.register(Arc::new(SdkAndPackagesFilter::new()));
        }
        for name in disabled {
            tracing::debug!(target: "depsnap::pipeline", filter = %name, "Filter disabled");
        }
        Ok(pipeline)
    }
}
