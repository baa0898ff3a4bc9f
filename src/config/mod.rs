//! Configuration module for tokio_php_client.
//!
//! Configuration is loaded once from environment variables and then passed
//! explicitly to the components that need it.
//!
//! # Example
//!
//! ```rust,ignore
//! use tokio_php_client::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Target: {}", config.client.target);
//! ```

mod client;
mod error;
mod logging;
mod parse;

pub use client::{ClientConfig, DEFAULT_TARGET};
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

/// Complete application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// gRPC client configuration.
    pub client: ClientConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client: ClientConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::{debug, info};

        info!("Configuration loaded:");
        info!("  Target: {}", self.client.target);

        if self.client.force_raw {
            info!("  Raw invocation forced (GRPC_RAW)");
        }

        match self.client.connect_timeout {
            Some(timeout) => info!("  Connect timeout: {}ms", timeout.as_millis()),
            None => debug!("  Connect timeout: transport default"),
        }
    }
}
