use tracing_subscriber::EnvFilter;

const LOG_ENV_VARS: [&str; 2] = ["ORDERSTORM_LOG", "RUST_LOG"];

/// Install the global tracing subscriber. `ORDERSTORM_LOG` (then `RUST_LOG`)
/// wins over the `--verbose` flag; an unparsable filter falls back the same
/// way as an absent one. Repeated calls keep the first subscriber.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = LOG_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging was already initialized; keeping the existing subscriber.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_keeps_the_first_subscriber() {
        init_logging(true);
        init_logging(false);
    }
}
