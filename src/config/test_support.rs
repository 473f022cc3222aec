use std::time::Duration;

use super::Settings;

/// Baseline settings for unit tests: a small actor roster and the default
/// market economics.
pub(crate) fn sample_settings() -> Settings {
    Settings {
        base_url: "http://127.0.0.1:9".to_owned(),
        levels: [1usize, 2]
            .iter()
            .filter_map(|value| crate::args::PositiveUsize::try_from(*value).ok())
            .collect(),
        duration: Duration::from_secs(1),
        actors: vec!["user_0".to_owned(), "user_1".to_owned(), "user_2".to_owned()],
        base_asset: "USD".to_owned(),
        quote_asset: "ETC".to_owned(),
        balance_range: 5_000_000..=10_000_000,
        reference_price: 1_000,
        price_band_permille: 50,
        qty_range: 1..=1_000,
        request_timeout: Duration::from_secs(10),
        connect_timeout: Duration::from_secs(5),
        charts_path: "./charts".to_owned(),
        no_charts: true,
        no_setup: true,
    }
}
