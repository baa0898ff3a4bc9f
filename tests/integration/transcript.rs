//! Full demonstration run against a live server.

use tokio_php_client::demo::{self, Transcript};

use crate::helpers::*;

#[tokio::test]
#[ignore]
async fn test_full_transcript() {
    let server = TestServer::new();
    let mut out = Transcript::new(Vec::new());

    let tally = demo::run(&server.config, &mut out).await.expect("demo run failed");
    let text = String::from_utf8(out.into_inner()).unwrap();

    assert!(text.contains("1. Health Check:"));
    assert!(text.contains("4. Streaming Response:"));
    assert_eq!(tally.succeeded + tally.failed, 4);
}
