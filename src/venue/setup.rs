use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::workload::BalanceBook;

use super::client::{MarketSetup, VenueClient};

/// Best-effort venue preparation before one level: create the market and
/// seed every actor's balances. Failures are logged and never abort the
/// run; the returned book reflects the amounts that were requested.
pub async fn prepare_level<R: Rng>(
    client: &VenueClient,
    settings: &Settings,
    rng: &mut R,
) -> BalanceBook {
    match client
        .create_market(&settings.base_asset, &settings.quote_asset)
        .await
    {
        Ok(MarketSetup::Created) => info!("Market {} created", settings.market()),
        Ok(MarketSetup::AlreadyExists) => debug!("Market {} already exists", settings.market()),
        Ok(MarketSetup::Rejected(status)) => {
            warn!("Market creation rejected with status {}", status);
        }
        Err(err) => warn!("Market creation failed: {}", err),
    }

    let mut book = BalanceBook::new();
    for actor in &settings.actors {
        let mut balances = std::collections::BTreeMap::new();
        for asset in [settings.base_asset.as_str(), settings.quote_asset.as_str()] {
            let amount = rng.gen_range(settings.balance_range.clone());
            match client.seed_balance(actor, asset, amount).await {
                Ok(status) if status.is_success() => {}
                Ok(status) => {
                    warn!(
                        "Seeding {} {} for {} returned status {}",
                        amount, asset, actor, status
                    );
                }
                Err(err) => warn!("Seeding {} for {} failed: {}", asset, actor, err),
            }
            balances.insert(asset.to_owned(), amount);
        }
        book.insert(actor.clone(), balances);
    }
    book
}
