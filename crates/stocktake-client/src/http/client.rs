/*
[INPUT]:  HTTP configuration (base URL, timeouts, token store handle)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::{Arc, RwLock};
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Url};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::http::Result;
use crate::session::TokenStore;

/// Base URL for the stocktake API
const SERVER_BASE_URL: &str = "https://foresee-technologies.com/";
/// API version path prefix, joined onto the server base
const API_PREFIX: &str = "api/v1/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Timeout budget for ordinary requests
    pub timeout: Duration,
    /// Timeout budget for the heavier product-scan submission
    pub scan_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
            scan_timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the stocktake API.
///
/// Holds a read-only handle on the token store for bearer injection;
/// only the session manager writes or clears the token.
#[derive(Debug)]
pub struct StocktakeClient {
    http_client: Client,
    api_base: Url,
    config: ClientConfig,
    token_store: Arc<dyn TokenStore>,
    // Process-wide abort switch. Cancelling it rejects every racing
    // request; a fresh token is armed so later calls proceed normally.
    abort_switch: RwLock<CancellationToken>,
}

impl StocktakeClient {
    /// Create a new client with default configuration
    pub fn new(token_store: Arc<dyn TokenStore>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), token_store)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, token_store: Arc<dyn TokenStore>) -> Result<Self> {
        Self::with_config_and_base_url(config, SERVER_BASE_URL, token_store)
    }

    /// Create a new client against an explicit server base URL (tests)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        server_base_url: &str,
        token_store: Arc<dyn TokenStore>,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;

        // Keep the trailing slash so endpoint joins stay inside the prefix.
        let server = if server_base_url.ends_with('/') {
            Url::parse(server_base_url)?
        } else {
            Url::parse(&format!("{server_base_url}/"))?
        };

        Ok(Self {
            http_client,
            api_base: server.join(API_PREFIX)?,
            config,
            token_store,
            abort_switch: RwLock::new(CancellationToken::new()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build full URL for an API endpoint (relative to the version prefix)
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.api_base.join(endpoint)?)
    }

    /// Build request builder for unauthenticated endpoints
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build request builder with the bearer token attached when present.
    ///
    /// A store read failure is logged and the request proceeds without the
    /// header; the server rejects it and the caller sees a normal API error.
    pub(crate) fn authorized_request(
        &self,
        method: Method,
        endpoint: &str,
    ) -> Result<RequestBuilder> {
        let mut builder = self
            .api_request(method, endpoint)?
            .header(ACCEPT, "application/json");

        match self.token_store.load() {
            Ok(Some(token)) => builder = builder.bearer_auth(token),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "token store read failed, sending without credential"),
        }

        Ok(builder)
    }

    /// Handle on the current abort switch, for racing a request against it
    pub(crate) fn cancel_handle(&self) -> CancellationToken {
        self.abort_switch
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Abort every request currently in flight.
    ///
    /// Used on sign-out so a late response can never touch a torn-down
    /// session. Subsequent requests race against a fresh switch.
    pub fn abort_in_flight(&self) {
        let mut guard = self.abort_switch.write().unwrap_or_else(|e| e.into_inner());
        guard.cancel();
        *guard = CancellationToken::new();
    }
}
