//! Integration tests for tokio_php_client
//!
//! These tests require a running tokio_php server with gRPC enabled and
//! are ignored by default.
//! Run with: docker compose up -d && cargo test --test integration -- --ignored
//!
//! Environment variables:
//! - GRPC_TEST_HOST: gRPC address of the server (default: localhost:50051)

mod helpers;

mod raw;
#[cfg(feature = "bindings")]
mod typed;
#[cfg(feature = "bindings")]
mod transcript;
