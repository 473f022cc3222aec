mod args;
mod charts;
mod config;
mod engine;
mod entry;
mod error;
mod logger;
mod metrics;
mod summary;
mod sweep;
mod venue;
mod workload;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
