//! Common test utilities for dictionary client tests.

use wiremock::MockServer;
use yadict::DictionaryClient;

/// API key used by every test client.
pub const TEST_KEY: &str = "test-key";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a client pointed at the mock server.
pub fn test_client(server: &MockServer) -> DictionaryClient {
    DictionaryClient::builder()
        .url(server.uri())
        .api_key(TEST_KEY)
        .build()
}
