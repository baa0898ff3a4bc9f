//! Test helpers and utilities

use std::time::Duration;

use tokio_php_client::config::ClientConfig;
use tokio_php_client::grpc::ChannelManager;

/// Live server the tests talk to
pub struct TestServer {
    pub config: ClientConfig,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a TestServer with the default or env-configured address
    pub fn new() -> Self {
        let target =
            std::env::var("GRPC_TEST_HOST").unwrap_or_else(|_| "localhost:50051".to_string());

        let mut config = ClientConfig::new(target);
        config.connect_timeout = Some(Duration::from_secs(5));

        Self { config }
    }

    /// Open a channel manager for the server
    pub fn manager(&self) -> ChannelManager {
        ChannelManager::open(&self.config).expect("Invalid GRPC_TEST_HOST")
    }
}
