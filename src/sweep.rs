use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::Settings;
use crate::engine::{HttpOrderExecutor, drive_window};
use crate::error::{AppError, AppResult};
use crate::metrics::{LevelStats, LevelSummary};
use crate::summary;
use crate::venue::{VenueClient, prepare_level};
use crate::workload::{BalanceBook, Workload};

/// Run every configured concurrency level, strictly in order and never
/// overlapping, printing each level's report as it finishes. Setup
/// failures are absorbed inside `prepare_level`; only a controller defect
/// aborts the sweep.
///
/// # Errors
///
/// Returns an error when the order endpoint cannot be formed, the
/// statistics accumulator cannot be created, or the window controller
/// reports a defect.
pub async fn run_sweep(settings: &Settings, venue: &VenueClient) -> AppResult<Vec<LevelSummary>> {
    let mut rng = StdRng::from_entropy();
    let mut summaries = Vec::with_capacity(settings.levels.len());

    for level in &settings.levels {
        let limit = level.get();
        info!(
            "Starting level: {} concurrent orders for {:?}",
            limit, settings.duration
        );

        let balances = if settings.no_setup {
            BalanceBook::new()
        } else {
            prepare_level(venue, settings, &mut rng).await
        };
        let workload = Workload::new(settings, balances);
        let executor =
            HttpOrderExecutor::new(venue, workload.market()).map_err(AppError::venue)?;
        let mut stats = LevelStats::new(limit).map_err(AppError::metrics)?;

        let elapsed = drive_window(
            &executor,
            &workload,
            limit,
            settings.duration,
            &mut stats,
        )
        .await
        .map_err(AppError::engine)?;

        info!("Level {} finished: {} orders dispatched", limit, stats.total());
        let level_summary = stats.finalize(elapsed);
        for line in summary::level_lines(&level_summary) {
            println!("{line}");
        }
        summaries.push(level_summary);
    }

    Ok(summaries)
}
