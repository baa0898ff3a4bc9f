//! Raw invocation against a live server.

use bytes::Bytes;
use tokio_php_client::grpc::{RawCall, RawInvoker, WireMethod};

use crate::helpers::*;

/// Empty HealthCheckRequest answered with an encoded HealthCheckResponse
#[tokio::test]
#[ignore]
async fn test_raw_check_returns_bytes() {
    let server = TestServer::new();

    let response = server
        .manager()
        .scoped(|channel| async move {
            RawInvoker::new(channel)
                .unary(WireMethod::CHECK, Bytes::new())
                .await
        })
        .await
        .expect("raw Check failed");

    // Field 1 (status, varint) if not the default UNKNOWN value
    if !response.is_empty() {
        assert_eq!(response[0], 0x08);
    }
}

/// Unknown method is reported as Unimplemented
#[tokio::test]
#[ignore]
async fn test_raw_unknown_method() {
    let server = TestServer::new();
    let method = WireMethod::new("tokio_php.v1.PhpService", "DoesNotExist");

    let err = server
        .manager()
        .scoped(|channel| async move {
            RawInvoker::new(channel).unary(method, Bytes::new()).await
        })
        .await
        .unwrap_err();

    assert_eq!(err.code(), tonic::Code::Unimplemented);
}
