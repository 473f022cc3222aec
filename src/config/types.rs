use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub levels: Option<Vec<usize>>,
    pub duration: Option<DurationValue>,
    pub actors: Option<usize>,
    pub actor_prefix: Option<String>,
    pub base_asset: Option<String>,
    pub quote_asset: Option<String>,
    pub balance_min: Option<u64>,
    pub balance_max: Option<u64>,
    pub reference_price: Option<u64>,
    pub price_band: Option<u64>,
    pub qty_min: Option<u64>,
    pub qty_max: Option<u64>,
    pub timeout: Option<DurationValue>,
    pub connect_timeout: Option<DurationValue>,
    pub charts_path: Option<String>,
    pub no_charts: Option<bool>,
    pub no_setup: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, String> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err("duration must be positive".to_owned())
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => crate::args::parse_duration(text),
        }
    }
}
