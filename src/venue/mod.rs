mod client;
mod setup;
mod types;


pub use client::{MarketSetup, VenueClient};
pub use setup::prepare_level;
pub use types::{BalanceSeedRequest, MarketCreateRequest, OrderRequest, OrderResponse, Side};
