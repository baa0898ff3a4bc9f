//! gRPC client for the tokio_php `PhpService`.
//!
//! Two invocation paths share one channel:
//!
//! - **Typed** (`bindings` feature): generated messages and stub, see
//!   [`TypedClient`] and the [`PhpServiceApi`] trait.
//! - **Raw**: a wire method name plus the pass-through [`BytesCodec`], see
//!   [`RawInvoker`]. Works without any compiled schema.
//!
//! The path is chosen once per run by [`InvocationMode::detect`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tokio_php_client::config::ClientConfig;
//! use tokio_php_client::grpc::{ChannelManager, PhpServiceApi, TypedClient};
//! use tokio_php_client::grpc::proto::HealthCheckRequest;
//!
//! let manager = ChannelManager::open(&ClientConfig::default())?;
//! let status = manager
//!     .scoped(|channel| async move {
//!         TypedClient::new(channel).check(HealthCheckRequest::default()).await
//!     })
//!     .await?;
//! ```
//!
//! # Equivalent grpcurl calls
//!
//! ```bash
//! grpcurl -plaintext localhost:50051 tokio_php.v1.PhpService/Check
//! grpcurl -plaintext -d '{"script_path": "index.php", "method": "GET"}' \
//!     localhost:50051 tokio_php.v1.PhpService/Execute
//! ```

mod channel;
mod codec;
mod error;
mod health;
mod mode;
mod raw;
mod stream;

#[cfg(feature = "bindings")]
mod request;
#[cfg(feature = "bindings")]
mod typed;

pub use channel::ChannelManager;
pub use codec::{BytesCodec, BytesDecoder, BytesEncoder};
pub use error::{ClientError, RpcError};
pub use health::StatusLabel;
pub use mode::{bindings_available, InvocationMode};
pub use raw::{RawCall, RawInvoker, WireMethod, SERVICE_NAME};
pub use stream::{BoundedStream, StreamEnd, StreamSummary, Terminal, STREAM_CHUNK_LIMIT};

#[cfg(feature = "bindings")]
pub use request::ScriptCall;
#[cfg(feature = "bindings")]
pub use typed::{PhpServiceApi, TypedClient, REQUEST_ID_KEY};

// Generated code from proto/php_service.proto
#[cfg(feature = "bindings")]
pub mod proto {
    include!("generated/tokio_php.v1.rs");
}
