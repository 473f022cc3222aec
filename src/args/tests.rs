use clap::Parser;
use std::time::Duration;

use crate::error::AppResult;

use super::HarnessArgs;
use super::parsers::parse_duration;
use super::types::{PositiveU64, PositiveUsize};

fn parse(argv: &[&str]) -> AppResult<HarnessArgs> {
    let mut full = vec!["orderstorm"];
    full.extend_from_slice(argv);
    Ok(HarnessArgs::try_parse_from(full)?)
}

#[test]
fn levels_parse_from_a_comma_list() -> AppResult<()> {
    let args = parse(&["--url", "http://venue.local", "--levels", "1,10,100"])?;
    let levels: Vec<usize> = args
        .levels
        .unwrap_or_default()
        .iter()
        .map(|level| level.get())
        .collect();
    assert_eq!(levels, vec![1, 10, 100]);
    Ok(())
}

#[test]
fn zero_levels_are_rejected_by_the_parser() {
    let result = HarnessArgs::try_parse_from([
        "orderstorm",
        "--url",
        "http://venue.local",
        "--levels",
        "0,10",
    ]);
    assert!(result.is_err());
}

#[test]
fn duration_flag_accepts_unit_suffixes() -> AppResult<()> {
    let args = parse(&["--url", "http://venue.local", "--duration", "90s"])?;
    assert_eq!(args.duration, Some(Duration::from_secs(90)));
    Ok(())
}

#[test]
fn flags_default_to_off() -> AppResult<()> {
    let args = parse(&["--url", "http://venue.local"])?;
    assert!(!args.no_charts);
    assert!(!args.no_setup);
    assert!(!args.verbose);
    assert!(args.levels.is_none());
    Ok(())
}

#[test]
fn positive_newtypes_reject_zero() {
    assert!(PositiveU64::try_from(0).is_err());
    assert!(PositiveUsize::try_from(0).is_err());
    let parsed = "42".parse::<PositiveU64>().map(PositiveU64::get);
    assert!(matches!(parsed, Ok(42)));
}

#[test]
fn duration_parser_accepts_units_and_rejects_zero() {
    assert_eq!(parse_duration("500ms"), Ok(Duration::from_millis(500)));
    assert_eq!(parse_duration("90s"), Ok(Duration::from_secs(90)));
    assert_eq!(parse_duration("2m"), Ok(Duration::from_secs(120)));
    assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3_600)));
    assert_eq!(parse_duration("15"), Ok(Duration::from_secs(15)));
    assert!(parse_duration("0").is_err());
    assert!(parse_duration("0ms").is_err());
    assert!(parse_duration("10d").is_err());
    assert!(parse_duration("abc").is_err());
    assert!(parse_duration("").is_err());
}
