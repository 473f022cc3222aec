use std::ffi::OsString;
use std::path::Path;

use clap::{CommandFactory, FromArgMatches};
use tracing::info;

use crate::args::HarnessArgs;
use crate::config::{self, Settings};
use crate::error::AppResult;
use crate::venue::VenueClient;

pub(crate) fn run() -> AppResult<()> {
    let args = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

fn parse_args() -> AppResult<Option<HarnessArgs>> {
    let mut cmd = HarnessArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = HarnessArgs::from_arg_matches(&matches)?;

    Ok(Some(args))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !Path::new(config::DEFAULT_CONFIG_FILE).exists()
}

async fn run_async(args: &HarnessArgs) -> AppResult<()> {
    let file = config::load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args, file.as_ref())?;

    info!(
        url = %settings.base_url,
        market = %settings.market(),
        levels = ?settings.levels,
        "starting sweep"
    );

    let venue = VenueClient::new(&settings)?;
    let summaries = crate::sweep::run_sweep(&settings, &venue).await?;

    for line in crate::summary::comparison_lines(&summaries) {
        println!("{line}");
    }

    if settings.no_charts {
        return Ok(());
    }
    match crate::charts::render_charts(&summaries, &settings.charts_path)? {
        Some(base) => println!("Charts written to {base}_*.png"),
        None => println!("No results to chart."),
    }

    Ok(())
}
