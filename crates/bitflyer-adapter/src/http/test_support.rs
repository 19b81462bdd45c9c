//! Shared fixtures for the endpoint unit tests

use std::sync::Arc;

use wiremock::{MockServer, Request};

use crate::http::signature::{ACCESS_KEY, ACCESS_SIGN, ACCESS_TIMESTAMP, FixedClock, RequestSigner};
use crate::http::{BitflyerClient, ClientConfig, Credentials};

pub(crate) const TEST_KEY: &str = "test-key";
pub(crate) const TEST_SECRET: &str = "test-secret";
pub(crate) const TEST_TIMESTAMP: &str = "1700000000";

pub(crate) fn public_client(server: &MockServer) -> BitflyerClient {
    BitflyerClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .expect("client init")
}

pub(crate) fn signed_client(server: &MockServer) -> BitflyerClient {
    public_client(server)
        .with_credentials(Credentials::new(TEST_KEY, TEST_SECRET))
        .with_clock(Arc::new(FixedClock::new(TEST_TIMESTAMP)))
}

/// Recompute the signature the server should see for a recorded request
pub(crate) fn assert_signed(request: &Request) {
    let mut signed_path = request.url.path().to_string();
    if let Some(query) = request.url.query() {
        signed_path.push('?');
        signed_path.push_str(query);
    }
    let body = String::from_utf8_lossy(&request.body);

    let signer = RequestSigner::new(Credentials::new(TEST_KEY, TEST_SECRET));
    let expected = signer
        .sign(TEST_TIMESTAMP, request.method.as_str(), &signed_path, &body)
        .expect("sign");

    assert_eq!(request.headers.get(ACCESS_KEY).expect("ACCESS-KEY"), TEST_KEY);
    assert_eq!(
        request.headers.get(ACCESS_TIMESTAMP).expect("ACCESS-TIMESTAMP"),
        TEST_TIMESTAMP
    );
    assert_eq!(
        request.headers.get(ACCESS_SIGN).expect("ACCESS-SIGN"),
        expected.as_str()
    );
    assert_eq!(
        request.headers.get("content-type").expect("content-type"),
        "application/json"
    );
}

/// The single request the mock server recorded
pub(crate) async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}
