//! Upstream flight API client.
//!
//! One request per call, no retries. Every failure except cancellation is
//! turned into the sample board plus a diagnostic, so callers always get
//! something to render.

use reqwest::header::ACCEPT;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::fallback::sample_flights;
use crate::flight::{Direction, Flight, AIRPORT_CODE};
use crate::normalize::normalize;

/// Path used when none is configured.
const DEFAULT_PATH: &str = "flights";

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Diagnostic shown when no live call is attempted.
pub const CONFIG_MISSING_MESSAGE: &str =
    "Flight API configuration is missing. Showing sample Pearson data instead.";

/// Flights for one board plus, when live data was not used, the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    flights: Vec<Flight>,
    error: Option<String>,
}

impl FetchResult {
    /// Flights that came from the upstream API.
    #[must_use]
    pub fn live(flights: Vec<Flight>) -> Self {
        Self {
            flights,
            error: None,
        }
    }

    /// The sample flights for `direction`, with a diagnostic.
    #[must_use]
    pub fn fallback(direction: Direction, message: impl Into<String>) -> Self {
        Self {
            flights: sample_flights(direction),
            error: Some(message.into()),
        }
    }

    /// The flights, in upstream order.
    #[must_use]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Why live data was not used, if it wasn't.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether this result carries sample data.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Anything that can produce the flights for a board.
#[async_trait::async_trait]
pub trait FlightSource: Send + Sync {
    /// Fetch the flights for `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if `cancel` fires before the fetch
    /// completes. Other failures are reported inside the [`FetchResult`].
    async fn fetch_flights(
        &self,
        direction: Direction,
        cancel: &CancellationToken,
    ) -> Result<FetchResult>;
}

/// HTTP client for the flight data provider.
#[derive(Debug, Clone)]
pub struct FlightClient {
    http: reqwest::Client,
    api: ApiConfig,
}

impl FlightClient {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(api: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(api.timeout()).build()?;
        Ok(Self::with_http_client(api, http))
    }

    /// Use an already built HTTP client.
    #[must_use]
    pub fn with_http_client(api: ApiConfig, http: reqwest::Client) -> Self {
        Self { http, api }
    }

    /// URL for a board, without the query string.
    ///
    /// `{airport}` and `{direction}` in the configured path are substituted.
    #[must_use]
    pub fn request_url(&self, direction: Direction) -> String {
        let base = self.api.base_url.trim().trim_end_matches('/');
        let path = self.api.path.trim().trim_start_matches('/');
        let path = if path.is_empty() { DEFAULT_PATH } else { path };
        let path = path
            .replace("{airport}", AIRPORT_CODE)
            .replace("{direction}", direction.as_str());
        format!("{base}/{path}")
    }

    /// Fetch the flights for `direction`.
    ///
    /// Returns the sample flights with a diagnostic when the API is not
    /// configured (no request is made) or when the request fails in any way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] if `cancel` fires before the response
    /// has been read. The in-flight request is dropped.
    pub async fn fetch(
        &self,
        direction: Direction,
        cancel: &CancellationToken,
    ) -> Result<FetchResult> {
        if !self.api.is_configured() {
            let err = Error::ConfigurationMissing;
            warn!(%direction, error = %err, "using sample flights");
            return Ok(FetchResult::fallback(direction, CONFIG_MISSING_MESSAGE));
        }

        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(%direction, "flight fetch cancelled");
                return Err(Error::Cancelled);
            }
            outcome = self.fetch_live(direction) => outcome,
        };

        match outcome {
            Ok(flights) => {
                info!(%direction, count = flights.len(), "fetched live flights");
                Ok(FetchResult::live(flights))
            }
            Err(err) if err.is_recoverable() => {
                warn!(%direction, error = %err, "live flight data unavailable, using sample flights");
                Ok(FetchResult::fallback(
                    direction,
                    format!("Live flight data unavailable: {err}"),
                ))
            }
            Err(err) => Err(err),
        }
    }

    async fn fetch_live(&self, direction: Direction) -> Result<Vec<Flight>> {
        let url = self.request_url(direction);
        debug!(%url, %direction, "requesting flights");

        let mut request = self
            .http
            .get(&url)
            .query(&[("airport", AIRPORT_CODE), ("direction", direction.as_str())])
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, self.api.key.trim());

        let host = self.api.host.trim();
        if !host.is_empty() {
            request = request.header(API_HOST_HEADER, host);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus { status });
        }

        let body = response.bytes().await?;
        let root: Value = serde_json::from_slice(&body).map_err(Error::MalformedResponse)?;
        Ok(normalize(&root, direction))
    }
}

#[async_trait::async_trait]
impl FlightSource for FlightClient {
    async fn fetch_flights(
        &self,
        direction: Direction,
        cancel: &CancellationToken,
    ) -> Result<FetchResult> {
        self.fetch(direction, cancel).await
    }
}
