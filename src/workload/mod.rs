use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rand::Rng;

use crate::config::Settings;
use crate::venue::{OrderRequest, Side};

/// Seeded balances per actor per asset, in minor units. Read-only for the
/// lifetime of one level: balances are deliberately not decremented as
/// orders fill, matching the seeded load model. Late-run orders may exceed
/// the true remaining balance and come back as venue rejections, which the
/// aggregator tallies by status code.
pub type BalanceBook = BTreeMap<String, BTreeMap<String, u64>>;

/// Synthetic order generator. Pure and non-blocking: no I/O, no failure
/// path, no mutation of the balance snapshot.
#[derive(Debug, Clone)]
pub struct Workload {
    market: String,
    actors: Vec<String>,
    balances: BalanceBook,
    base_asset: String,
    quote_asset: String,
    reference_price: u64,
    price_band_permille: u64,
    qty_range: RangeInclusive<u64>,
}

impl Workload {
    #[must_use]
    pub fn new(settings: &Settings, balances: BalanceBook) -> Self {
        Self {
            market: settings.market(),
            actors: settings.actors.clone(),
            balances,
            base_asset: settings.base_asset.clone(),
            quote_asset: settings.quote_asset.clone(),
            reference_price: settings.reference_price,
            price_band_permille: settings.price_band_permille,
            qty_range: settings.qty_range.clone(),
        }
    }

    #[must_use]
    pub fn market(&self) -> &str {
        &self.market
    }

    /// Produce one order: uniform side, price within the configured band
    /// around the reference, quantity within the configured lot range and
    /// capped by what the actor's seeded balance could afford.
    pub fn next_order<R: Rng>(&self, rng: &mut R) -> OrderRequest {
        let idx = rng.gen_range(0..self.actors.len().max(1));
        let actor = self.actors.get(idx).cloned().unwrap_or_default();
        let side = if rng.gen_bool(0.5) {
            Side::Buy
        } else {
            Side::Sell
        };
        let price = self.pick_price(rng);
        let quantity = self.pick_quantity(rng, &actor, side, price);

        OrderRequest {
            market: self.market.clone(),
            user_id: actor,
            side,
            price,
            quantity,
        }
    }

    fn pick_price<R: Rng>(&self, rng: &mut R) -> u64 {
        let band = self
            .reference_price
            .saturating_mul(self.price_band_permille)
            .checked_div(1_000)
            .unwrap_or(0);
        let low = self.reference_price.saturating_sub(band).max(1);
        let high = self.reference_price.saturating_add(band);
        rng.gen_range(low..=high)
    }

    fn pick_quantity<R: Rng>(&self, rng: &mut R, actor: &str, side: Side, price: u64) -> u64 {
        let affordable = self.affordable_lots(actor, side, price);
        let low = *self.qty_range.start();
        let high = (*self.qty_range.end()).min(affordable).max(low);
        rng.gen_range(low..=high)
    }

    // Quantity ceiling from the seeded snapshot: buys are limited by the
    // base-asset balance at the chosen price, sells by the quote-asset
    // balance. The snapshot itself never changes during a run.
    fn affordable_lots(&self, actor: &str, side: Side, price: u64) -> u64 {
        let balance_of = |asset: &str| -> u64 {
            self.balances
                .get(actor)
                .and_then(|assets| assets.get(asset))
                .copied()
                .unwrap_or(u64::MAX)
        };
        match side {
            Side::Buy => balance_of(&self.base_asset)
                .checked_div(price.max(1))
                .unwrap_or(u64::MAX),
            Side::Sell => balance_of(&self.quote_asset),
        }
    }
}
