use std::time::Duration;

use clap::Parser;

use crate::args::HarnessArgs;
use crate::error::{AppError, AppResult, ValidationError};

use super::types::{ConfigFile, DurationValue};
use super::Settings;

fn args_from(argv: &[&str]) -> AppResult<HarnessArgs> {
    let mut full = vec!["orderstorm"];
    full.extend_from_slice(argv);
    Ok(HarnessArgs::try_parse_from(full)?)
}

#[test]
fn config_file_parses_full_document() -> AppResult<()> {
    let file: ConfigFile = toml::from_str(
        r#"
url = "http://venue.local"
levels = [1, 10, 100]
duration = "30s"
actors = 5
actor_prefix = "trader"
base_asset = "USD"
quote_asset = "BTC"
balance_min = 1000
balance_max = 2000
reference_price = 500
price_band = 25
qty_min = 1
qty_max = 50
timeout = 5
connect_timeout = "2s"
charts_path = "./out"
no_charts = true
no_setup = true
"#,
    )
    .map_err(|err| {
        AppError::config(crate::error::ConfigError::Parse {
            path: "inline".into(),
            source: err,
        })
    })?;

    assert_eq!(file.url.as_deref(), Some("http://venue.local"));
    assert_eq!(file.levels, Some(vec![1, 10, 100]));
    assert_eq!(file.actors, Some(5));
    assert_eq!(file.reference_price, Some(500));
    Ok(())
}

#[test]
fn defaults_apply_when_nothing_else_is_given() -> AppResult<()> {
    let args = args_from(&["--url", "http://venue.local"])?;
    let settings = Settings::resolve(&args, None)?;

    assert_eq!(settings.base_url, "http://venue.local");
    assert_eq!(
        settings.levels.iter().map(|l| l.get()).collect::<Vec<_>>(),
        vec![1, 10, 100]
    );
    assert_eq!(settings.duration, Duration::from_secs(10));
    assert_eq!(settings.actors.len(), 10);
    assert_eq!(settings.actors.first().map(String::as_str), Some("user_0"));
    assert_eq!(settings.market(), "USD:ETC");
    assert_eq!(settings.max_level(), 100);
    Ok(())
}

#[test]
fn cli_wins_over_config_file() -> AppResult<()> {
    let args = args_from(&["--url", "http://cli.local", "--duration", "5s"])?;
    let file = ConfigFile {
        url: Some("http://file.local".to_owned()),
        duration: Some(DurationValue::Seconds(60)),
        actors: Some(2),
        ..ConfigFile::default()
    };
    let settings = Settings::resolve(&args, Some(&file))?;

    assert_eq!(settings.base_url, "http://cli.local");
    assert_eq!(settings.duration, Duration::from_secs(5));
    // Untouched by the CLI, so the file value applies.
    assert_eq!(settings.actors.len(), 2);
    Ok(())
}

#[test]
fn missing_url_is_rejected() -> AppResult<()> {
    let args = args_from(&[])?;
    let result = Settings::resolve(&args, None);
    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::MissingUrl))
    ));
    Ok(())
}

#[test]
fn empty_level_list_is_rejected() -> AppResult<()> {
    let args = args_from(&["--url", "http://venue.local"])?;
    let file = ConfigFile {
        levels: Some(vec![]),
        ..ConfigFile::default()
    };
    let result = Settings::resolve(&args, Some(&file));
    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::EmptyLevels))
    ));
    Ok(())
}

#[test]
fn reversed_balance_range_is_rejected() -> AppResult<()> {
    let args = args_from(&[
        "--url",
        "http://venue.local",
        "--balance-min",
        "100",
        "--balance-max",
        "10",
    ])?;
    let result = Settings::resolve(&args, None);
    assert!(matches!(
        result,
        Err(AppError::Validation(
            ValidationError::BalanceRangeReversed { min: 100, max: 10 }
        ))
    ));
    Ok(())
}

#[test]
fn price_band_must_stay_below_full_reference() -> AppResult<()> {
    let args = args_from(&["--url", "http://venue.local", "--price-band", "1000"])?;
    let result = Settings::resolve(&args, None);
    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::PriceBandTooWide {
            band_permille: 1_000
        }))
    ));
    Ok(())
}

#[test]
fn actor_roster_uses_the_configured_prefix() -> AppResult<()> {
    let args = args_from(&[
        "--url",
        "http://venue.local",
        "--actors",
        "3",
        "--actor-prefix",
        "trader",
    ])?;
    let settings = Settings::resolve(&args, None)?;
    assert_eq!(
        settings.actors,
        vec!["trader_0", "trader_1", "trader_2"]
    );
    Ok(())
}
