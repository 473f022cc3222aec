mod app;
mod config;
mod engine;
mod metrics;
mod validation;
mod venue;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use engine::EngineError;
pub use metrics::MetricsError;
pub use validation::ValidationError;
pub use venue::VenueError;
