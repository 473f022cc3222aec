use std::collections::BTreeMap;

/// Immutable statistics for one completed concurrency level. Rates are
/// integer fixed point: `success_rate_x10000` is a fraction scaled by
/// 10_000 and `orders_per_sec_x100` is orders/second scaled by 100.
#[derive(Debug, Clone)]
pub struct LevelSummary {
    pub level: usize,
    pub total_orders: u64,
    pub successful_orders: u64,
    pub transport_errors: u64,
    pub timeout_orders: u64,
    pub trade_events: u64,
    pub status_counts: BTreeMap<u16, u64>,
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    pub avg_latency_ms: u64,
    pub p50_latency_ms: u64,
    pub p90_latency_ms: u64,
    pub p99_latency_ms: u64,
    pub success_rate_x10000: u64,
    pub orders_per_sec_x100: u64,
    /// First recorded completion to last recorded completion.
    pub observed_wall_ms: u64,
    /// First dispatch to last harvested completion.
    pub elapsed_ms: u64,
}
