use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

/// One synthetic order, immutable once generated. Prices are ticks and
/// quantities are lots; the venue takes plain integers in minor units.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub market: String,
    pub user_id: String,
    pub side: Side,
    pub price: u64,
    pub quantity: u64,
}

#[derive(Debug, Serialize)]
pub struct BalanceSeedRequest<'a> {
    pub asset: &'a str,
    pub amount: u64,
}

#[derive(Debug, Serialize)]
pub struct MarketCreateRequest<'a> {
    pub buy_asset: &'a str,
    pub sell_asset: &'a str,
}

/// Order submission response. Only the trade events matter to the harness;
/// the payload stays otherwise opaque.
#[derive(Debug, Default, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub trades: Vec<serde_json::Value>,
}
