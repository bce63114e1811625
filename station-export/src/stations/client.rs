//! Irish Rail realtime API client.

use std::future::Future;

use tracing::{debug, warn};

use super::error::{FetchFailure, StationError};

/// Default base URL for the realtime API.
pub const DEFAULT_BASE_URL: &str = "https://api.irishrail.ie/";

/// Default endpoint listing every station as XML.
pub const DEFAULT_ENDPOINT: &str = "realtime/realtime.asmx/getAllStationsXML";

/// Result of asking the feed for its station document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Raw body of a successful response
    Document(Vec<u8>),
    /// No document could be obtained; treated as zero stations
    Unavailable(FetchFailure),
}

/// Something that can produce the raw station document.
///
/// The pipeline is generic over this so it can be driven without a network.
pub trait StationSource {
    /// Fetch the station document once.
    fn fetch(&self) -> impl Future<Output = FetchOutcome>;
}

/// Configuration for the station API client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Path appended verbatim to the base URL
    pub endpoint: String,
}

impl StationClientConfig {
    /// Create a config pointing at the production station listing.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom endpoint path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Full request URL. No separator is inserted between the two parts.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the station listing endpoint.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: String,
}

impl StationClient {
    /// Create a new client with default HTTP settings.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            url: config.url(),
        })
    }

    /// The URL this client requests.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the station document.
    ///
    /// Non-success statuses and transport errors are logged and reported as
    /// [`FetchOutcome::Unavailable`] rather than returned as errors.
    pub async fn fetch_document(&self) -> FetchOutcome {
        debug!(url = %self.url, "requesting station list");

        let response = match self.http.get(&self.url).send().await {
            Ok(response) => response,
            Err(e) => return unavailable(&self.url, FetchFailure::Transport(e.to_string())),
        };

        let status = response.status();
        if !status.is_success() {
            return unavailable(&self.url, FetchFailure::Status(status.as_u16()));
        }

        match response.bytes().await {
            Ok(body) => {
                debug!(bytes = body.len(), "received station list");
                FetchOutcome::Document(body.to_vec())
            }
            Err(e) => unavailable(&self.url, FetchFailure::Transport(e.to_string())),
        }
    }
}

impl StationSource for StationClient {
    async fn fetch(&self) -> FetchOutcome {
        self.fetch_document().await
    }
}

fn unavailable(url: &str, reason: FetchFailure) -> FetchOutcome {
    warn!(url, %reason, "unable to get station data from endpoint");
    FetchOutcome::Unavailable(reason)
}
