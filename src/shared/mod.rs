pub mod cancellation;
pub mod error;
pub mod local_tracing;
pub mod result;
pub mod security;

pub use cancellation::CancellationFlag;
pub use local_tracing::enable_tracing_by_env;
pub use result::Result;
