//! Raw invocation: a wire method name, a codec and a payload.
//!
//! This is the minimal contract for calling a remote method without any
//! compiled schema. The response is returned as opaque bytes.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use http::uri::PathAndQuery;
use tonic::client::Grpc;
use tonic::transport::Channel;
use tonic::{Code, Request};
use tracing::debug;

use super::codec::BytesCodec;
use super::error::RpcError;

/// Fully qualified package name of the PHP service.
pub const SERVICE_NAME: &str = "tokio_php.v1.PhpService";

/// A remote method identified by service and method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireMethod {
    pub service: &'static str,
    pub method: &'static str,
}

impl WireMethod {
    pub const CHECK: WireMethod = WireMethod::new(SERVICE_NAME, "Check");

    pub const fn new(service: &'static str, method: &'static str) -> Self {
        Self { service, method }
    }

    /// HTTP/2 path, e.g. `/tokio_php.v1.PhpService/Check`.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.service, self.method)
    }
}

impl fmt::Display for WireMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.service, self.method)
    }
}

/// A unary call over opaque bytes.
#[async_trait]
pub trait RawCall: Send {
    async fn unary(&mut self, method: WireMethod, payload: Bytes) -> Result<Bytes, RpcError>;
}

/// Binding-free invoker over a channel.
#[derive(Debug, Clone)]
pub struct RawInvoker {
    inner: Grpc<Channel>,
}

impl RawInvoker {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: Grpc::new(channel),
        }
    }
}

#[async_trait]
impl RawCall for RawInvoker {
    async fn unary(&mut self, method: WireMethod, payload: Bytes) -> Result<Bytes, RpcError> {
        let path = PathAndQuery::try_from(method.path())
            .map_err(|e| RpcError::new(Code::Internal, format!("invalid method path: {}", e)))?;

        self.inner
            .ready()
            .await
            .map_err(|e| RpcError::new(Code::Unknown, format!("Service was not ready: {}", e)))?;

        debug!(method = %method, bytes = payload.len(), "Raw unary call");

        let response = self
            .inner
            .unary(Request::new(payload), path, BytesCodec)
            .await?;

        Ok(response.into_inner())
    }
}
