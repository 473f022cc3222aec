mod loader;
mod types;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

use std::ops::RangeInclusive;
use std::time::Duration;

pub use loader::load_config;
pub(crate) use loader::DEFAULT_CONFIG_FILE;
pub use types::{ConfigFile, DurationValue};

use crate::args::{
    DEFAULT_ACTOR_COUNT, DEFAULT_ACTOR_PREFIX, DEFAULT_BALANCE_MAX, DEFAULT_BALANCE_MIN,
    DEFAULT_BASE_ASSET, DEFAULT_CHARTS_PATH, DEFAULT_CONNECT_TIMEOUT, DEFAULT_DURATION,
    DEFAULT_LEVELS, DEFAULT_PRICE_BAND_PERMILLE, DEFAULT_QTY_MAX, DEFAULT_QTY_MIN,
    DEFAULT_QUOTE_ASSET, DEFAULT_REFERENCE_PRICE, DEFAULT_REQUEST_TIMEOUT, HarnessArgs,
    PositiveUsize,
};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

/// Fully resolved run configuration: CLI flags first, config file second,
/// built-in defaults last.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub levels: Vec<PositiveUsize>,
    pub duration: Duration,
    pub actors: Vec<String>,
    pub base_asset: String,
    pub quote_asset: String,
    pub balance_range: RangeInclusive<u64>,
    pub reference_price: u64,
    pub price_band_permille: u64,
    pub qty_range: RangeInclusive<u64>,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub charts_path: String,
    pub no_charts: bool,
    pub no_setup: bool,
}

impl Settings {
    /// Merge CLI arguments with an optional config file and validate.
    ///
    /// # Errors
    ///
    /// Returns an error when required options are missing, ranges are
    /// reversed, or a config duration does not parse.
    pub fn resolve(args: &HarnessArgs, file: Option<&ConfigFile>) -> AppResult<Self> {
        let base_url = args
            .url
            .clone()
            .or_else(|| file.and_then(|f| f.url.clone()))
            .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;

        let levels = resolve_levels(args, file)?;
        let duration = resolve_duration(args.duration, file.and_then(|f| f.duration.as_ref()))
            .map_err(|message| ConfigError::InvalidDuration {
                field: "duration",
                message,
            })?
            .unwrap_or(DEFAULT_DURATION);
        let request_timeout =
            resolve_duration(args.timeout, file.and_then(|f| f.timeout.as_ref()))
                .map_err(|message| ConfigError::InvalidDuration {
                    field: "timeout",
                    message,
                })?
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let connect_timeout = resolve_duration(
            args.connect_timeout,
            file.and_then(|f| f.connect_timeout.as_ref()),
        )
        .map_err(|message| ConfigError::InvalidDuration {
            field: "connect_timeout",
            message,
        })?
        .unwrap_or(DEFAULT_CONNECT_TIMEOUT);

        let actor_count = match args.actors {
            Some(count) => count,
            None => {
                let raw = file
                    .and_then(|f| f.actors)
                    .unwrap_or(DEFAULT_ACTOR_COUNT);
                PositiveUsize::try_from(raw).map_err(AppError::validation)?
            }
        };
        let actor_prefix = args
            .actor_prefix
            .clone()
            .or_else(|| file.and_then(|f| f.actor_prefix.clone()))
            .unwrap_or_else(|| DEFAULT_ACTOR_PREFIX.to_owned());
        let actors = actor_roster(&actor_prefix, actor_count.get());

        let balance_min = args
            .balance_min
            .or_else(|| file.and_then(|f| f.balance_min))
            .unwrap_or(DEFAULT_BALANCE_MIN);
        let balance_max = args
            .balance_max
            .or_else(|| file.and_then(|f| f.balance_max))
            .unwrap_or(DEFAULT_BALANCE_MAX);
        if balance_min > balance_max {
            return Err(AppError::validation(
                ValidationError::BalanceRangeReversed {
                    min: balance_min,
                    max: balance_max,
                },
            ));
        }

        let reference_price = match args.reference_price {
            Some(price) => price.get(),
            None => {
                let raw = file
                    .and_then(|f| f.reference_price)
                    .unwrap_or(DEFAULT_REFERENCE_PRICE);
                if raw == 0 {
                    return Err(AppError::validation(ValidationError::ValueTooSmall {
                        min: 1,
                    }));
                }
                raw
            }
        };
        let price_band_permille = args
            .price_band
            .or_else(|| file.and_then(|f| f.price_band))
            .unwrap_or(DEFAULT_PRICE_BAND_PERMILLE);
        if price_band_permille >= 1_000 {
            return Err(AppError::validation(ValidationError::PriceBandTooWide {
                band_permille: price_band_permille,
            }));
        }

        let qty_min = args
            .qty_min
            .map(u64::from)
            .or_else(|| file.and_then(|f| f.qty_min))
            .unwrap_or(DEFAULT_QTY_MIN);
        let qty_max = args
            .qty_max
            .map(u64::from)
            .or_else(|| file.and_then(|f| f.qty_max))
            .unwrap_or(DEFAULT_QTY_MAX);
        if qty_min == 0 {
            return Err(AppError::validation(ValidationError::ValueTooSmall {
                min: 1,
            }));
        }
        if qty_min > qty_max {
            return Err(AppError::validation(
                ValidationError::QuantityRangeReversed {
                    min: qty_min,
                    max: qty_max,
                },
            ));
        }

        let charts_path = args
            .charts_path
            .clone()
            .or_else(|| file.and_then(|f| f.charts_path.clone()))
            .unwrap_or_else(|| DEFAULT_CHARTS_PATH.to_owned());
        let no_charts = args.no_charts || file.and_then(|f| f.no_charts).unwrap_or(false);
        let no_setup = args.no_setup || file.and_then(|f| f.no_setup).unwrap_or(false);

        Ok(Settings {
            base_url,
            levels,
            duration,
            actors,
            base_asset: args
                .base_asset
                .clone()
                .or_else(|| file.and_then(|f| f.base_asset.clone()))
                .unwrap_or_else(|| DEFAULT_BASE_ASSET.to_owned()),
            quote_asset: args
                .quote_asset
                .clone()
                .or_else(|| file.and_then(|f| f.quote_asset.clone()))
                .unwrap_or_else(|| DEFAULT_QUOTE_ASSET.to_owned()),
            balance_range: balance_min..=balance_max,
            reference_price,
            price_band_permille,
            qty_range: qty_min..=qty_max,
            request_timeout,
            connect_timeout,
            charts_path,
            no_charts,
            no_setup,
        })
    }

    /// Market identifier in the venue's `{base}:{quote}` form.
    #[must_use]
    pub fn market(&self) -> String {
        format!("{}:{}", self.base_asset, self.quote_asset)
    }

    /// Largest configured concurrency level; sizes the connection pool.
    #[must_use]
    pub fn max_level(&self) -> usize {
        self.levels
            .iter()
            .map(|level| level.get())
            .max()
            .unwrap_or(1)
    }
}

fn resolve_levels(args: &HarnessArgs, file: Option<&ConfigFile>) -> AppResult<Vec<PositiveUsize>> {
    if let Some(levels) = args.levels.as_ref() {
        if levels.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyLevels));
        }
        return Ok(levels.clone());
    }
    if let Some(raw) = file.and_then(|f| f.levels.as_ref()) {
        if raw.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyLevels));
        }
        let mut levels = Vec::with_capacity(raw.len());
        for value in raw {
            levels.push(PositiveUsize::try_from(*value).map_err(AppError::validation)?);
        }
        return Ok(levels);
    }
    Ok(DEFAULT_LEVELS
        .iter()
        .filter_map(|value| PositiveUsize::try_from(*value).ok())
        .collect())
}

fn resolve_duration(
    cli: Option<Duration>,
    file: Option<&DurationValue>,
) -> Result<Option<Duration>, String> {
    if let Some(duration) = cli {
        return Ok(Some(duration));
    }
    match file {
        Some(value) => value.to_duration().map(Some),
        None => Ok(None),
    }
}

fn actor_roster(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("{}_{}", prefix, idx)).collect()
}
