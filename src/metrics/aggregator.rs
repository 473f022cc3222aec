use std::collections::BTreeMap;
use std::time::Duration;

use hdrhistogram::Histogram;
use tokio::time::Instant;
use tracing::warn;

use crate::engine::Completion;
use crate::error::MetricsError;

use super::types::LevelSummary;

const RATE_SCALE: u128 = 10_000;
const THROUGHPUT_SCALE: u128 = 100;
const MS_PER_SEC: u128 = 1_000;

/// Online statistics for one level. Owned by exactly one run; `finalize`
/// consumes the accumulator, so recording after finalization cannot
/// compile.
#[derive(Debug)]
pub struct LevelStats {
    level: usize,
    total: u64,
    successful: u64,
    transport_errors: u64,
    timeouts: u64,
    trade_events: u64,
    status_counts: BTreeMap<u16, u64>,
    latency_sum_ms: u128,
    min_latency_ms: u64,
    max_latency_ms: u64,
    histogram: Histogram<u64>,
    first_completion: Option<Instant>,
    last_completion: Option<Instant>,
}

impl LevelStats {
    /// Create an empty accumulator for one concurrency level.
    ///
    /// # Errors
    ///
    /// Returns an error if the latency histogram cannot be created.
    pub fn new(level: usize) -> Result<Self, MetricsError> {
        let histogram =
            Histogram::<u64>::new(3).map_err(|err| MetricsError::HistogramCreate {
                message: err.to_string(),
            })?;
        Ok(Self {
            level,
            total: 0,
            successful: 0,
            transport_errors: 0,
            timeouts: 0,
            trade_events: 0,
            status_counts: BTreeMap::new(),
            latency_sum_ms: 0,
            min_latency_ms: u64::MAX,
            max_latency_ms: 0,
            histogram,
            first_completion: None,
            last_completion: None,
        })
    }

    /// Fold one completion into the running statistics. O(1).
    pub fn record(&mut self, completion: &Completion) {
        let latency_ms =
            u64::try_from(completion.response_time.as_millis()).unwrap_or(u64::MAX);

        self.total = self.total.saturating_add(1);
        if completion.is_success() {
            self.successful = self.successful.saturating_add(1);
        }
        if completion.transport_error {
            self.transport_errors = self.transport_errors.saturating_add(1);
        }
        if completion.timed_out {
            self.timeouts = self.timeouts.saturating_add(1);
        }
        self.trade_events = self.trade_events.saturating_add(completion.trade_events);
        let tally = self.status_counts.entry(completion.status_code).or_insert(0);
        *tally = tally.saturating_add(1);

        self.latency_sum_ms = self.latency_sum_ms.saturating_add(u128::from(latency_ms));
        self.min_latency_ms = self.min_latency_ms.min(latency_ms);
        self.max_latency_ms = self.max_latency_ms.max(latency_ms);
        if let Err(err) = self.histogram.record(latency_ms.max(1)) {
            warn!("Failed to record latency sample: {}", err);
        }

        if self.first_completion.is_none() {
            self.first_completion = Some(completion.completed_at);
        }
        self.last_completion = Some(completion.completed_at);
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Derive the immutable summary. `elapsed` spans the first dispatch to
    /// the last harvested completion; throughput uses the observed wall
    /// time between the first and last recorded completions instead.
    #[must_use]
    pub fn finalize(self, elapsed: Duration) -> LevelSummary {
        let observed_wall_ms = match (self.first_completion, self.last_completion) {
            (Some(first), Some(last)) => {
                u64::try_from(last.duration_since(first).as_millis()).unwrap_or(u64::MAX)
            }
            _ => 0,
        };
        let avg_latency_ms = if self.total > 0 {
            let avg = self
                .latency_sum_ms
                .checked_div(u128::from(self.total))
                .unwrap_or(0);
            u64::try_from(avg).unwrap_or(u64::MAX)
        } else {
            0
        };
        let min_latency_ms = if self.total > 0 { self.min_latency_ms } else { 0 };
        let (p50_latency_ms, p90_latency_ms, p99_latency_ms) = if self.histogram.is_empty() {
            (0, 0, 0)
        } else {
            (
                self.histogram.value_at_quantile(0.5),
                self.histogram.value_at_quantile(0.9),
                self.histogram.value_at_quantile(0.99),
            )
        };
        let orders_per_sec_x100 = throughput_x100(self.total, observed_wall_ms);

        LevelSummary {
            level: self.level,
            total_orders: self.total,
            successful_orders: self.successful,
            transport_errors: self.transport_errors,
            timeout_orders: self.timeouts,
            trade_events: self.trade_events,
            status_counts: self.status_counts,
            min_latency_ms,
            max_latency_ms: self.max_latency_ms,
            avg_latency_ms,
            p50_latency_ms,
            p90_latency_ms,
            p99_latency_ms,
            success_rate_x10000: rate_x10000(self.successful, self.total),
            orders_per_sec_x100,
            observed_wall_ms,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// `part / total` as a fraction scaled by 10_000; 0 when `total` is 0.
#[must_use]
pub fn rate_x10000(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = u128::from(part)
        .saturating_mul(RATE_SCALE)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

fn throughput_x100(total: u64, wall_ms: u64) -> u64 {
    if wall_ms == 0 {
        return 0;
    }
    let scaled = u128::from(total)
        .saturating_mul(THROUGHPUT_SCALE)
        .saturating_mul(MS_PER_SEC)
        .checked_div(u128::from(wall_ms))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}
