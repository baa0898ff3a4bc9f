//! Channel lifecycle: one channel per run, released exactly once.

use std::future::Future;

use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::config::ClientConfig;

use super::error::ClientError;

/// Owns the single channel to the configured target.
///
/// The channel is handed to the selected invocation path through
/// [`ChannelManager::scoped`] and released when the scope ends, whether the
/// calls inside succeeded or not. Releasing consumes the manager, so it
/// hands out no further handles.
///
/// The handle passed into the scope is a clone and keeps the connection
/// alive for as long as it exists. Build clients from it inside the scope
/// and let them drop there; never return it from the closure.
pub struct ChannelManager<C = Channel> {
    target: String,
    channel: C,
}

impl ChannelManager<Channel> {
    /// Open a channel to the configured target.
    ///
    /// The connection is established lazily on the first call, so an
    /// unreachable peer surfaces as a per-call `Unavailable` error.
    pub fn open(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut endpoint = Endpoint::from_shared(config.endpoint_uri()).map_err(|e| {
            ClientError::InvalidEndpoint {
                target: config.target.clone(),
                error: e.to_string(),
            }
        })?;

        if let Some(timeout) = config.connect_timeout {
            endpoint = endpoint.connect_timeout(timeout);
        }

        let channel = endpoint.connect_lazy();
        debug!(addr = %config.target, "Channel opened");

        Ok(Self::new(config.target.clone(), channel))
    }
}

impl<C: Clone> ChannelManager<C> {
    /// Wrap an already created channel handle.
    pub fn new(target: impl Into<String>, channel: C) -> Self {
        Self {
            target: target.into(),
            channel,
        }
    }

    /// Target address this channel points at.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Run `f` with the channel, then release it.
    pub async fn scoped<F, Fut, T>(self, f: F) -> T
    where
        F: FnOnce(C) -> Fut,
        Fut: Future<Output = T>,
    {
        let output = f(self.channel.clone()).await;
        self.close();
        output
    }

    /// Release the channel.
    pub fn close(self) {
        debug!(addr = %self.target, "Channel closed");
        drop(self.channel);
    }
}
