use std::path::Path;

use plotters::prelude::*;

use crate::error::AppResult;
use crate::metrics::LevelSummary;

const SLOTS_PER_LEVEL: u64 = 4;
const CHART_SIZE: (u32, u32) = (1_600, 600);

/// Render the per-level comparison charts and return the common file base,
/// or `None` when there is nothing to plot.
///
/// # Errors
///
/// Returns an error when the output directory cannot be created or a chart
/// fails to render.
pub fn render_charts(summaries: &[LevelSummary], charts_path: &str) -> AppResult<Option<String>> {
    if summaries.is_empty() {
        return Ok(None);
    }
    std::fs::create_dir_all(charts_path)?;
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let base = Path::new(charts_path)
        .join(format!("orderstorm_{}", stamp))
        .to_string_lossy()
        .into_owned();

    draw_latency_chart(summaries, &format!("{}_latency.png", base))?;
    draw_throughput_chart(summaries, &format!("{}_throughput.png", base))?;

    Ok(Some(base))
}

fn draw_latency_chart(summaries: &[LevelSummary], file_path: &str) -> AppResult<()> {
    let root = BitMapBackend::new(file_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = (summaries.len() as u64).saturating_mul(SLOTS_PER_LEVEL);
    let y_max = summaries
        .iter()
        .map(|summary| summary.max_latency_ms)
        .max()
        .unwrap_or(1)
        .saturating_add(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Order Latency vs Concurrent Orders", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..x_max, 0u64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Concurrent Orders")
        .y_desc("Latency (ms)")
        .x_label_formatter(&|slot| {
            let idx = slot.checked_div(SLOTS_PER_LEVEL).unwrap_or(0);
            summaries
                .get(usize::try_from(idx).unwrap_or(usize::MAX))
                .map(|summary| summary.level.to_string())
                .unwrap_or_default()
        })
        .draw()?;

    struct LatencyBar {
        label: &'static str,
        offset: u64,
        color: RGBColor,
        value: fn(&LevelSummary) -> u64,
    }

    let bars = [
        LatencyBar {
            label: "Min",
            offset: 0,
            color: BLUE,
            value: |summary| summary.min_latency_ms,
        },
        LatencyBar {
            label: "Avg",
            offset: 1,
            color: GREEN,
            value: |summary| summary.avg_latency_ms,
        },
        LatencyBar {
            label: "Max",
            offset: 2,
            color: RED,
            value: |summary| summary.max_latency_ms,
        },
    ];

    for bar in &bars {
        let rectangles: Vec<Rectangle<(u64, u64)>> = summaries
            .iter()
            .enumerate()
            .map(|(idx, summary)| {
                let x0 = (idx as u64)
                    .saturating_mul(SLOTS_PER_LEVEL)
                    .saturating_add(bar.offset);
                Rectangle::new(
                    [(x0, 0), (x0.saturating_add(1), (bar.value)(summary))],
                    bar.color.filled(),
                )
            })
            .collect();
        let color = bar.color;
        chart
            .draw_series(rectangles)?
            .label(bar.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x.saturating_add(20), y)], color)
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

fn draw_throughput_chart(summaries: &[LevelSummary], file_path: &str) -> AppResult<()> {
    let root = BitMapBackend::new(file_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = (summaries.len() as u64).max(1);
    let y_max = summaries
        .iter()
        .map(|summary| summary.orders_per_sec_x100)
        .max()
        .unwrap_or(1)
        .saturating_add(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Throughput vs Concurrent Orders", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..x_max, 0u64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Concurrent Orders")
        .y_desc("Orders per Second")
        .x_label_formatter(&|idx| {
            summaries
                .get(usize::try_from(*idx).unwrap_or(usize::MAX))
                .map(|summary| summary.level.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|value| {
            crate::summary::format_x100(*value)
        })
        .draw()?;

    let points: Vec<(u64, u64)> = summaries
        .iter()
        .enumerate()
        .map(|(idx, summary)| (idx as u64, summary.orders_per_sec_x100))
        .collect();
    chart
        .draw_series(LineSeries::new(points.clone(), RED))?
        .label("Orders/sec")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x.saturating_add(20), y)], RED));
    chart.draw_series(points.iter().map(|point| Circle::new(*point, 4, RED.filled())))?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn summary_for(level: usize, throughput_x100: u64) -> LevelSummary {
        LevelSummary {
            level,
            total_orders: 100,
            successful_orders: 100,
            transport_errors: 0,
            timeout_orders: 0,
            trade_events: 10,
            status_counts: BTreeMap::new(),
            min_latency_ms: 5,
            max_latency_ms: 50,
            avg_latency_ms: 20,
            p50_latency_ms: 18,
            p90_latency_ms: 40,
            p99_latency_ms: 48,
            success_rate_x10000: 10_000,
            orders_per_sec_x100: throughput_x100,
            observed_wall_ms: 1_000,
            elapsed_ms: 1_050,
        }
    }

    #[test]
    fn renders_both_charts() -> crate::error::AppResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().to_string_lossy().into_owned();
        let base = render_charts(
            &[summary_for(1, 1_000), summary_for(10, 5_000)],
            &path,
        )?;
        let base = base.unwrap_or_default();
        assert!(std::path::Path::new(&format!("{}_latency.png", base)).exists());
        assert!(std::path::Path::new(&format!("{}_throughput.png", base)).exists());
        Ok(())
    }

    #[test]
    fn empty_input_renders_nothing() -> crate::error::AppResult<()> {
        let rendered = render_charts(&[], "./does-not-matter")?;
        assert!(rendered.is_none());
        Ok(())
    }
}
