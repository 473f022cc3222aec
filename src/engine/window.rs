use std::time::Duration;

use futures_util::FutureExt;
use futures_util::stream::{FuturesUnordered, StreamExt};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::Instant;

use crate::error::EngineError;
use crate::metrics::LevelStats;
use crate::workload::Workload;

use super::executor::OrderExecutor;

/// Drive one level: keep up to `limit` submissions in flight until the
/// deadline passes, then drain. Returns the elapsed time from the first
/// dispatch to the last harvested completion.
///
/// The in-flight set is owned by this single task; only the executor
/// futures themselves run concurrently. Completions are harvested in
/// completion order, not dispatch order.
///
/// # Errors
///
/// Returns an error only for a controller defect (the window exceeding its
/// limit). Executor-reported failures are ordinary completions and land in
/// `stats`.
pub async fn drive_window<E: OrderExecutor>(
    executor: &E,
    workload: &Workload,
    limit: usize,
    duration: Duration,
    stats: &mut LevelStats,
) -> Result<Duration, EngineError> {
    let mut rng = StdRng::from_entropy();
    let mut in_flight = FuturesUnordered::new();
    let started = Instant::now();
    let deadline = started.checked_add(duration).unwrap_or(started);
    let mut last_harvest = started;

    loop {
        // Filling: top the window up while the run is live.
        while in_flight.len() < limit && Instant::now() < deadline {
            in_flight.push(executor.execute(workload.next_order(&mut rng)));
        }
        if in_flight.len() > limit {
            return Err(EngineError::WindowOverflow {
                size: in_flight.len(),
                limit,
            });
        }

        // Waiting: block until the first outstanding call settles.
        match in_flight.next().await {
            Some(completion) => {
                stats.record(&completion);
                last_harvest = Instant::now();
                // Harvesting: collect everything else that already settled
                // without blocking, so the refill sees the true window size.
                while let Some(Some(ready)) = in_flight.next().now_or_never() {
                    stats.record(&ready);
                    last_harvest = Instant::now();
                }
            }
            None => {
                // Draining is complete once the set is empty past the
                // deadline; before the deadline an empty set just refills.
                if Instant::now() >= deadline {
                    break;
                }
            }
        }
    }

    Ok(last_harvest.duration_since(started))
}
