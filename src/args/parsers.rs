use std::time::Duration;

/// Parse a duration written as digits plus an optional unit. Bare numbers
/// are seconds; `ms`, `s`, `m` and `h` are accepted. Zero is rejected, as
/// a zero-length level would measure nothing.
pub(crate) fn parse_duration(raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    let unit_start = trimmed
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(trimmed.len(), |(idx, _)| idx);
    let (digits, unit) = trimmed.split_at(unit_start);
    if digits.is_empty() {
        return Err(format!("expected digits in duration, got '{trimmed}'"));
    }
    let amount: u64 = digits
        .parse()
        .map_err(|err| format!("bad duration amount '{digits}': {err}"))?;

    let millis = match unit {
        "ms" => Some(amount),
        "" | "s" => amount.checked_mul(1_000),
        "m" => amount.checked_mul(60_000),
        "h" => amount.checked_mul(3_600_000),
        other => {
            return Err(format!(
                "unknown duration unit '{other}' (use ms, s, m or h)"
            ));
        }
    };
    match millis {
        Some(0) => Err("duration must be positive".to_owned()),
        Some(ms) => Ok(Duration::from_millis(ms)),
        None => Err(format!("duration '{trimmed}' is too large")),
    }
}

pub(super) fn parse_duration_arg(value: &str) -> Result<Duration, String> {
    parse_duration(value)
}
