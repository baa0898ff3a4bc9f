//! tokio_php_client - gRPC client for the tokio_php `PhpService`.
//!
//! Exercises a running tokio_php server over gRPC: a health check, two
//! script executions and a bounded server stream, printing a transcript of
//! every call.
//!
//! # Invocation paths
//!
//! - **Typed** (default `bindings` feature): generated messages and stub
//! - **Raw**: wire method name plus a pass-through byte codec, used when
//!   bindings are not compiled in or when `GRPC_RAW` / `--raw` is set
//!
//! # Example
//!
//! ```rust,ignore
//! use tokio_php_client::config::ClientConfig;
//! use tokio_php_client::demo::{self, Transcript};
//!
//! let config = ClientConfig::new("localhost:50051");
//! let mut transcript = Transcript::new(std::io::stdout());
//! let tally = demo::run(&config, &mut transcript).await?;
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 ()" without git info
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod demo;
pub mod grpc;
pub mod logging;
pub mod trace_context;

// Re-exports for convenience
pub use config::Config;
pub use demo::{Tally, Transcript};
pub use grpc::{ChannelManager, InvocationMode, RpcError};
