use std::time::Duration;

// Mirrors the seeded scenario the venue was sized for: ten actors trading
// USD against ETC with balances in integer minor units.
pub(crate) const DEFAULT_LEVELS: [usize; 3] = [1, 10, 100];
pub(crate) const DEFAULT_DURATION: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_ACTOR_COUNT: usize = 10;
pub(crate) const DEFAULT_ACTOR_PREFIX: &str = "user";
pub(crate) const DEFAULT_BASE_ASSET: &str = "USD";
pub(crate) const DEFAULT_QUOTE_ASSET: &str = "ETC";
pub(crate) const DEFAULT_BALANCE_MIN: u64 = 5_000_000;
pub(crate) const DEFAULT_BALANCE_MAX: u64 = 10_000_000;
pub(crate) const DEFAULT_REFERENCE_PRICE: u64 = 1_000;
pub(crate) const DEFAULT_PRICE_BAND_PERMILLE: u64 = 50;
pub(crate) const DEFAULT_QTY_MIN: u64 = 1;
pub(crate) const DEFAULT_QTY_MAX: u64 = 1_000;
pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub(crate) const DEFAULT_CHARTS_PATH: &str = "./charts";
