//! gRPC client configuration.

use std::time::Duration;

use super::parse::{env_bool, env_duration, env_or};
use super::ConfigError;

/// Default target when `GRPC_HOST` is not set.
pub const DEFAULT_TARGET: &str = "localhost:50051";

/// gRPC client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Target address in `host:port` form (a URI with scheme is accepted too).
    pub target: String,
    /// Skip generated bindings and use the raw invocation path.
    pub force_raw: bool,
    /// Connection timeout (None = transport default).
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Load client configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let target = env_or("GRPC_HOST", DEFAULT_TARGET).trim().to_string();
        if target.is_empty() {
            return Err(ConfigError::Invalid {
                key: "GRPC_HOST".into(),
                message: "must not be empty".into(),
            });
        }

        Ok(Self {
            target,
            force_raw: env_bool("GRPC_RAW", false),
            connect_timeout: env_duration("GRPC_CONNECT_TIMEOUT", "off")?,
        })
    }

    /// Create a configuration for the given target with defaults elsewhere.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            force_raw: false,
            connect_timeout: None,
        }
    }

    /// Override the target address.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Force the raw invocation path.
    pub fn with_force_raw(mut self, force_raw: bool) -> Self {
        self.force_raw = force_raw;
        self
    }

    /// Endpoint URI for the transport.
    ///
    /// Plain `host:port` targets get an `http://` scheme.
    pub fn endpoint_uri(&self) -> String {
        if self.target.starts_with("http://") || self.target.starts_with("https://") {
            self.target.clone()
        } else {
            format!("http://{}", self.target)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}
