use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("A venue base URL is required (--url or the config file).")]
    MissingUrl,
    #[error("At least one concurrency level is required.")]
    EmptyLevels,
    #[error("Invalid number: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Balance range is reversed: min {min} > max {max}.")]
    BalanceRangeReversed { min: u64, max: u64 },
    #[error("Quantity range is reversed: min {min} > max {max}.")]
    QuantityRangeReversed { min: u64, max: u64 },
    #[error("Price band must be below 1000 per mille, got {band_permille}.")]
    PriceBandTooWide { band_permille: u64 },
}
