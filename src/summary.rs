use crate::metrics::LevelSummary;

const PERCENT_DIVISOR: u64 = 100;

/// Report lines for one finished level.
#[must_use]
pub fn level_lines(summary: &LevelSummary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Level {} ({} concurrent orders):",
        summary.level, summary.level
    ));
    lines.push(format!("  total_orders: {}", summary.total_orders));
    lines.push(format!("  trade_events: {}", summary.trade_events));
    lines.push(format!(
        "  success_rate: {}",
        format_rate_x10000(summary.success_rate_x10000)
    ));
    lines.push(format!(
        "  orders_per_sec: {}",
        format_x100(summary.orders_per_sec_x100)
    ));
    lines.push(format!(
        "  latency_ms: min {} / avg {} / max {}",
        summary.min_latency_ms, summary.avg_latency_ms, summary.max_latency_ms
    ));
    lines.push(format!(
        "  latency_ms: p50 {} / p90 {} / p99 {}",
        summary.p50_latency_ms, summary.p90_latency_ms, summary.p99_latency_ms
    ));
    lines.push(format!(
        "  transport_errors: {} (timeouts {})",
        summary.transport_errors, summary.timeout_orders
    ));
    let statuses: Vec<String> = summary
        .status_counts
        .iter()
        .map(|(status, count)| format!("{}={}", status, count))
        .collect();
    lines.push(format!(
        "  status_counts: {}",
        if statuses.is_empty() {
            "none".to_owned()
        } else {
            statuses.join(" ")
        }
    ));
    lines.push(format!(
        "  elapsed_ms: {} (observed wall {})",
        summary.elapsed_ms, summary.observed_wall_ms
    ));
    lines
}

/// Comparison block across all finished levels.
#[must_use]
pub fn comparison_lines(summaries: &[LevelSummary]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Sweep summary:".to_owned());
    lines.push(format!(
        "  {:>8} {:>12} {:>14} {:>13} {:>10} {:>10} {:>10}",
        "level", "orders", "orders/sec", "success", "min_ms", "avg_ms", "max_ms"
    ));
    for summary in summaries {
        lines.push(format!(
            "  {:>8} {:>12} {:>14} {:>13} {:>10} {:>10} {:>10}",
            summary.level,
            summary.total_orders,
            format_x100(summary.orders_per_sec_x100),
            format_rate_x10000(summary.success_rate_x10000),
            summary.min_latency_ms,
            summary.avg_latency_ms,
            summary.max_latency_ms
        ));
    }
    lines
}

/// Render a x10000 fixed-point fraction as a percentage, e.g. 7000 -> "70.00%".
#[must_use]
pub fn format_rate_x10000(rate: u64) -> String {
    let whole = rate.checked_div(PERCENT_DIVISOR).unwrap_or(0);
    let frac = rate.checked_rem(PERCENT_DIVISOR).unwrap_or(0);
    format!("{}.{:02}%", whole, frac)
}

/// Render a x100 fixed-point value, e.g. 2105 -> "21.05".
#[must_use]
pub fn format_x100(value: u64) -> String {
    let whole = value.checked_div(PERCENT_DIVISOR).unwrap_or(0);
    let frac = value.checked_rem(PERCENT_DIVISOR).unwrap_or(0);
    format!("{}.{:02}", whole, frac)
}
