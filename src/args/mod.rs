mod cli;
mod defaults;
mod parsers;
mod types;

#[cfg(test)]
mod tests;

pub use cli::HarnessArgs;
pub(crate) use parsers::parse_duration;
pub(crate) use defaults::{
    DEFAULT_ACTOR_COUNT, DEFAULT_ACTOR_PREFIX, DEFAULT_BALANCE_MAX, DEFAULT_BALANCE_MIN,
    DEFAULT_BASE_ASSET, DEFAULT_CHARTS_PATH, DEFAULT_CONNECT_TIMEOUT, DEFAULT_DURATION,
    DEFAULT_LEVELS, DEFAULT_PRICE_BAND_PERMILLE, DEFAULT_QTY_MAX, DEFAULT_QTY_MIN,
    DEFAULT_QUOTE_ASSET, DEFAULT_REFERENCE_PRICE, DEFAULT_REQUEST_TIMEOUT,
};
pub use types::{PositiveU64, PositiveUsize};
