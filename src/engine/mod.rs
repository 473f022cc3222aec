mod executor;
mod window;


pub use executor::{Completion, HttpOrderExecutor, OrderExecutor};
pub use window::drive_window;
