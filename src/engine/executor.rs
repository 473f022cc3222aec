use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;
use url::Url;

use crate::error::VenueError;
use crate::venue::{OrderRequest, OrderResponse, VenueClient};

/// Terminal record for one dispatched order. Transport failures are
/// completions too (status 0 plus flags), never errors: the window
/// controller must not have to distinguish a crashed call from a reported
/// failure.
#[derive(Debug, Clone, Copy)]
pub struct Completion {
    pub response_time: Duration,
    pub status_code: u16,
    pub trade_events: u64,
    pub timed_out: bool,
    pub transport_error: bool,
    pub completed_at: Instant,
}

impl Completion {
    #[must_use]
    pub fn response(start: Instant, status_code: u16, trade_events: u64) -> Self {
        Self {
            response_time: start.elapsed(),
            status_code,
            trade_events,
            timed_out: false,
            transport_error: false,
            completed_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn failure(start: Instant, timed_out: bool) -> Self {
        Self {
            response_time: start.elapsed(),
            status_code: 0,
            trade_events: 0,
            timed_out,
            transport_error: !timed_out,
            completed_at: Instant::now(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        !self.timed_out
            && !self.transport_error
            && self.status_code >= 200
            && self.status_code < 300
    }
}

/// Seam between the window controller and the network. The HTTP
/// implementation talks to the venue; tests substitute deterministic
/// fakes.
#[async_trait]
pub trait OrderExecutor: Send + Sync {
    /// Perform exactly one submission and report its completion. Must not
    /// panic and must not return early before the call settles.
    async fn execute(&self, order: OrderRequest) -> Completion;
}

/// Submits orders over the shared venue connection pool. The measured time
/// spans the call and body read only; queuing ahead of `execute` is not
/// included.
#[derive(Debug, Clone)]
pub struct HttpOrderExecutor {
    http: Client,
    endpoint: Url,
}

impl HttpOrderExecutor {
    /// Bind an executor to one market's order endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error when the endpoint URL cannot be formed.
    pub fn new(client: &VenueClient, market: &str) -> Result<Self, VenueError> {
        Ok(Self {
            http: client.http(),
            endpoint: client.orders_endpoint(market)?,
        })
    }
}

#[async_trait]
impl OrderExecutor for HttpOrderExecutor {
    async fn execute(&self, order: OrderRequest) -> Completion {
        let start = Instant::now();
        match self
            .http
            .post(self.endpoint.clone())
            .json(&order)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.json::<OrderResponse>().await {
                    Ok(body) => Completion::response(
                        start,
                        status,
                        u64::try_from(body.trades.len()).unwrap_or(u64::MAX),
                    ),
                    Err(err) => {
                        debug!("Failed to read order response: {}", err);
                        Completion::failure(start, err.is_timeout())
                    }
                }
            }
            Err(err) => {
                debug!("Order submission failed: {}", err);
                Completion::failure(start, err.is_timeout())
            }
        }
    }
}
