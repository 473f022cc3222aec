mod aggregator;
mod types;


pub use aggregator::{LevelStats, rate_x10000};
pub use types::LevelSummary;
