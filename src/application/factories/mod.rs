mod formatter_factory;
mod pipeline_factory;
mod presenter_factory;

pub use formatter_factory::FormatterFactory;
pub use pipeline_factory::PipelineFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
