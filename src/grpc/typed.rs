//! Typed invocation through the generated stub.

use async_trait::async_trait;
use futures_util::Stream;
use tonic::codec::Streaming;
use tonic::metadata::MetadataValue;
use tonic::transport::Channel;
use tonic::{Request, Status};
use tracing::debug;
use uuid::Uuid;

use crate::trace_context::TraceContext;

use super::error::RpcError;
use super::proto::php_service_client::PhpServiceClient;
use super::proto::{
    ExecuteRequest, ExecuteResponse, HealthCheckRequest, HealthCheckResponse, StreamChunk,
};
use super::stream::Terminal;

/// Metadata key carrying the per-call request ID.
pub const REQUEST_ID_KEY: &str = "x-request-id";

/// The PHP service contract as seen by the client.
#[async_trait]
pub trait PhpServiceApi: Send {
    /// Server stream returned by [`PhpServiceApi::execute_stream`].
    type Chunks: Stream<Item = Result<StreamChunk, Status>> + Unpin + Send;

    /// Health probe. An empty service name asks for the overall status.
    async fn check(&mut self, request: HealthCheckRequest)
        -> Result<HealthCheckResponse, RpcError>;

    /// Run a script and wait for the complete response.
    async fn execute(&mut self, request: ExecuteRequest) -> Result<ExecuteResponse, RpcError>;

    /// Run a script and receive its output as it is produced.
    async fn execute_stream(&mut self, request: ExecuteRequest)
        -> Result<Self::Chunks, RpcError>;
}

impl Terminal for StreamChunk {
    fn is_final(&self) -> bool {
        self.is_final
    }
}

/// [`PhpServiceApi`] over the generated tonic client.
#[derive(Debug, Clone)]
pub struct TypedClient {
    inner: PhpServiceClient<Channel>,
    trace: TraceContext,
}

impl TypedClient {
    pub fn new(channel: Channel) -> Self {
        Self::with_trace(channel, TraceContext::from_env())
    }

    pub fn with_trace(channel: Channel, trace: TraceContext) -> Self {
        Self {
            inner: PhpServiceClient::new(channel),
            trace,
        }
    }

    /// Trace all calls of this client belong to.
    pub fn trace(&self) -> &TraceContext {
        &self.trace
    }

    /// Wrap a message with request ID and trace metadata.
    fn request<T>(&self, message: T, method: &'static str, span: &TraceContext) -> Request<T> {
        let mut request = Request::new(message);
        let request_id = Uuid::new_v4().to_string();

        if let Ok(value) = MetadataValue::try_from(request_id.as_str()) {
            request.metadata_mut().insert(REQUEST_ID_KEY, value);
        }
        span.inject(request.metadata_mut());

        debug!(
            method,
            request_id = %request_id,
            traceparent = %span,
            sampled = span.is_sampled(),
            "Calling PhpService"
        );
        request
    }

    /// Fill in `options.trace_parent` when options are sent without one.
    fn execute_request(
        &self,
        mut message: ExecuteRequest,
        method: &'static str,
    ) -> Request<ExecuteRequest> {
        let span = self.trace.child();
        if let Some(options) = message.options.as_mut() {
            if options.trace_parent.is_empty() {
                options.trace_parent = span.to_traceparent();
            }
        }
        self.request(message, method, &span)
    }
}

#[async_trait]
impl PhpServiceApi for TypedClient {
    type Chunks = Streaming<StreamChunk>;

    async fn check(
        &mut self,
        request: HealthCheckRequest,
    ) -> Result<HealthCheckResponse, RpcError> {
        let request = self.request(request, "Check", &self.trace.child());
        let response = self.inner.check(request).await?;
        Ok(response.into_inner())
    }

    async fn execute(&mut self, request: ExecuteRequest) -> Result<ExecuteResponse, RpcError> {
        let request = self.execute_request(request, "Execute");
        let response = self.inner.execute(request).await?;
        Ok(response.into_inner())
    }

    async fn execute_stream(
        &mut self,
        request: ExecuteRequest,
    ) -> Result<Self::Chunks, RpcError> {
        let request = self.execute_request(request, "ExecuteStream");
        let response = self.inner.execute_stream(request).await?;
        Ok(response.into_inner())
    }
}
