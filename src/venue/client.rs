use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::Settings;
use crate::error::VenueError;

use super::types::{BalanceSeedRequest, MarketCreateRequest};

/// Outcome of a market-creation call. All three cases are non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketSetup {
    Created,
    AlreadyExists,
    Rejected(u16),
}

/// Thin client over the venue's HTTP API. Cloning is cheap; the underlying
/// connection pool is shared and sized for the largest concurrency level.
#[derive(Debug, Clone)]
pub struct VenueClient {
    http: Client,
    base: Url,
}

impl VenueClient {
    /// Build a client against the configured venue endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn new(settings: &Settings) -> Result<Self, VenueError> {
        let base = Url::parse(&settings.base_url).map_err(|err| VenueError::InvalidBaseUrl {
            url: settings.base_url.clone(),
            source: err,
        })?;
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .pool_max_idle_per_host(settings.max_level())
            .build()
            .map_err(|err| VenueError::BuildClient { source: err })?;
        Ok(Self { http, base })
    }

    /// Resolve an endpoint under the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry path segments
    /// (e.g. a `data:` URL).
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, VenueError> {
        let mut url = self.base.clone();
        {
            let mut parts =
                url.path_segments_mut()
                    .map_err(|()| VenueError::BaseUrlNotHierarchical {
                        url: self.base.to_string(),
                    })?;
            parts.pop_if_empty();
            parts.extend(segments);
        }
        Ok(url)
    }

    /// `POST /balances/{actor}` - seed one asset balance for one actor.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure; non-2xx statuses are returned
    /// as values for the caller to log.
    pub async fn seed_balance(
        &self,
        actor: &str,
        asset: &str,
        amount: u64,
    ) -> Result<StatusCode, VenueError> {
        let url = self.endpoint(&["balances", actor])?;
        let response = self
            .http
            .post(url)
            .json(&BalanceSeedRequest { asset, amount })
            .send()
            .await
            .map_err(|err| VenueError::Request { source: err })?;
        Ok(response.status())
    }

    /// `POST /markets-manage` - create the market if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure only; rejection statuses map
    /// to [`MarketSetup`] variants.
    pub async fn create_market(
        &self,
        buy_asset: &str,
        sell_asset: &str,
    ) -> Result<MarketSetup, VenueError> {
        let url = self.endpoint(&["markets-manage"])?;
        let response = self
            .http
            .post(url)
            .json(&MarketCreateRequest {
                buy_asset,
                sell_asset,
            })
            .send()
            .await
            .map_err(|err| VenueError::Request { source: err })?;
        let status = response.status();
        if status.is_success() {
            Ok(MarketSetup::Created)
        } else if status == StatusCode::CONFLICT {
            Ok(MarketSetup::AlreadyExists)
        } else {
            Ok(MarketSetup::Rejected(status.as_u16()))
        }
    }

    /// `POST /markets/{market}/orders` endpoint for one market.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry path segments.
    pub fn orders_endpoint(&self, market: &str) -> Result<Url, VenueError> {
        self.endpoint(&["markets", market, "orders"])
    }

    #[must_use]
    pub fn http(&self) -> Client {
        self.http.clone()
    }
}
