/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for stocktake-client tests

use std::sync::Arc;
use std::time::Duration;

use stocktake_client::{ClientConfig, MemoryTokenStore, StocktakeClient, TokenStore};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A client wired to the mock server with an in-memory token store
pub fn mock_client(
    server: &MockServer,
    config: ClientConfig,
) -> (Arc<StocktakeClient>, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let client = StocktakeClient::with_config_and_base_url(
        config,
        &server.uri(),
        Arc::clone(&store) as Arc<dyn TokenStore>,
    )
    .expect("client init");
    (Arc::new(client), store)
}

/// A config with a tight timeout budget for race tests
#[allow(dead_code)]
pub fn tight_timeout_config(millis: u64) -> ClientConfig {
    ClientConfig {
        timeout: Duration::from_millis(millis),
        scan_timeout: Duration::from_millis(millis),
        ..ClientConfig::default()
    }
}

/// Mock bearer token for testing
#[allow(dead_code)]
pub fn mock_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}
