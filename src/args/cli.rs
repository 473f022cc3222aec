use clap::Parser;
use std::time::Duration;

use super::parsers::parse_duration_arg;
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Async load-generation harness for order-matching venues - bounded in-flight request windows, per-level latency/throughput stats, and chart exports."
)]
pub struct HarnessArgs {
    /// Venue base endpoint, e.g. https://venue.example.com
    #[arg(long, short)]
    pub url: Option<String>,

    /// Concurrency levels to sweep, comma separated (e.g. 1,10,100)
    #[arg(long, value_delimiter = ',')]
    pub levels: Option<Vec<PositiveUsize>>,

    /// Duration per level (supports ms/s/m/h)
    #[arg(long, short = 'z', value_parser = parse_duration_arg)]
    pub duration: Option<Duration>,

    /// Number of simulated actors
    #[arg(long)]
    pub actors: Option<PositiveUsize>,

    /// Prefix for generated actor identifiers
    #[arg(long = "actor-prefix")]
    pub actor_prefix: Option<String>,

    /// Asset spent on the buy side of the market
    #[arg(long = "base-asset")]
    pub base_asset: Option<String>,

    /// Asset received on the buy side of the market
    #[arg(long = "quote-asset")]
    pub quote_asset: Option<String>,

    /// Lower bound for seeded per-asset balances (minor units)
    #[arg(long = "balance-min")]
    pub balance_min: Option<u64>,

    /// Upper bound for seeded per-asset balances (minor units)
    #[arg(long = "balance-max")]
    pub balance_max: Option<u64>,

    /// Reference price in ticks around which orders are priced
    #[arg(long = "reference-price")]
    pub reference_price: Option<PositiveU64>,

    /// Price band around the reference price, per mille
    #[arg(long = "price-band")]
    pub price_band: Option<u64>,

    /// Minimum order quantity in lots
    #[arg(long = "qty-min")]
    pub qty_min: Option<PositiveU64>,

    /// Maximum order quantity in lots
    #[arg(long = "qty-max")]
    pub qty_max: Option<PositiveU64>,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long, value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Connection timeout (supports ms/s/m/h)
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Directory for chart output
    #[arg(long = "charts-path")]
    pub charts_path: Option<String>,

    /// Skip chart rendering
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Skip market creation and balance seeding before each level
    #[arg(long = "no-setup")]
    pub no_setup: bool,

    /// Enable debug logging (overridden by ORDERSTORM_LOG / RUST_LOG)
    #[arg(long, short)]
    pub verbose: bool,

    /// Config file path (TOML)
    #[arg(long, short)]
    pub config: Option<String>,
}
