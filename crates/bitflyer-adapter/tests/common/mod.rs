/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitflyer-adapter tests

use std::sync::Arc;

use bitflyer_adapter::{BitflyerClient, ClientConfig, Credentials, FixedClock};
use wiremock::MockServer;

pub const TEST_KEY: &str = "integration-key";
pub const TEST_SECRET: &str = "integration-secret";
pub const TEST_TIMESTAMP: &str = "1700000000";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, no credentials
pub fn public_client(server: &MockServer) -> BitflyerClient {
    BitflyerClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

/// Client pointed at the mock server with fixed credentials and clock
pub fn signed_client(server: &MockServer) -> BitflyerClient {
    public_client(server)
        .with_credentials(test_credentials())
        .with_clock(Arc::new(FixedClock::new(TEST_TIMESTAMP)))
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_KEY, TEST_SECRET)
}
