//! Typed calls against a live server.

use futures_util::StreamExt;
use tokio_php_client::grpc::proto::HealthCheckRequest;
use tokio_php_client::grpc::{
    BoundedStream, PhpServiceApi, ScriptCall, StatusLabel, StreamEnd, TypedClient,
    STREAM_CHUNK_LIMIT,
};

use crate::helpers::*;

#[tokio::test]
#[ignore]
async fn test_check_serving() {
    let server = TestServer::new();

    let response = server
        .manager()
        .scoped(|channel| async move {
            TypedClient::new(channel)
                .check(HealthCheckRequest::default())
                .await
        })
        .await
        .expect("Check failed");

    assert_eq!(StatusLabel(response.status).to_string(), "SERVING");
}

#[tokio::test]
#[ignore]
async fn test_execute_get() {
    let server = TestServer::new();
    let request = ScriptCall::get("index.php")
        .query("page", "1")
        .timeout_ms(5000)
        .build();

    let response = server
        .manager()
        .scoped(|channel| async move { TypedClient::new(channel).execute(request).await })
        .await
        .expect("Execute failed");

    assert!(response.status_code > 0);
    let metadata = response.metadata.expect("missing execution metadata");
    assert!(!metadata.request_id.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_execute_missing_script() {
    let server = TestServer::new();
    let request = ScriptCall::get("does/not/exist.php").build();

    let result = server
        .manager()
        .scoped(|channel| async move { TypedClient::new(channel).execute(request).await })
        .await;

    match result {
        // Servers may answer with an error status or an HTTP 404 response
        Ok(response) => assert_eq!(response.status_code, 404),
        Err(err) => assert_eq!(err.code(), tonic::Code::NotFound),
    }
}

#[tokio::test]
#[ignore]
async fn test_execute_stream_is_bounded() {
    let server = TestServer::new();

    let (received, summary) = server
        .manager()
        .scoped(|channel| async move {
            let chunks = TypedClient::new(channel)
                .execute_stream(ScriptCall::get("stream.php").build())
                .await
                .expect("ExecuteStream failed");

            let mut bounded = BoundedStream::new(chunks, STREAM_CHUNK_LIMIT);
            let mut received = 0;
            while let Some(chunk) = bounded.next().await {
                chunk.expect("stream error");
                received += 1;
            }
            (received, bounded.finish())
        })
        .await;

    assert_eq!(summary.chunks, received);
    assert!(received <= STREAM_CHUNK_LIMIT);
    assert!(matches!(
        summary.end,
        Some(StreamEnd::Final | StreamEnd::Limit | StreamEnd::Exhausted)
    ));
}
