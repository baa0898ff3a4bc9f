//! Typed demonstration: the four PhpService calls in a fixed order.

use std::collections::BTreeMap;
use std::io::{self, Write};

use futures_util::StreamExt;
use tracing::warn;

use crate::grpc::proto::{ExecuteRequest, HealthCheckRequest};
use crate::grpc::{
    BoundedStream, PhpServiceApi, RpcError, ScriptCall, StatusLabel, STREAM_CHUNK_LIMIT,
};

use super::transcript::Transcript;
use super::Tally;

/// Characters of the POST response body echoed to the transcript.
const BODY_PREVIEW_CHARS: usize = 200;

/// Run Check, Execute (GET), Execute (POST) and ExecuteStream in order.
///
/// Each call is its own failure boundary: an error is written to the
/// transcript and the next call still runs. Only transcript I/O errors
/// abort the sequence.
pub async fn run<A, W>(api: &mut A, out: &mut Transcript<W>) -> io::Result<Tally>
where
    A: PhpServiceApi,
    W: Write,
{
    let mut tally = Tally::default();

    out.line("Using generated proto bindings")?;
    out.blank()?;

    tally.record(health_check(api, out).await?);
    tally.record(execute_get(api, out).await?);
    tally.record(execute_post(api, out).await?);
    tally.record(execute_stream(api, out).await?);

    Ok(tally)
}

/// GET request with pagination parameters.
pub fn get_request() -> ExecuteRequest {
    ScriptCall::get("index.php")
        .query("page", "1")
        .query("limit", "10")
        .timeout_ms(5000)
        .profiling(false)
        .build()
}

/// Form POST with an auth header and a session cookie.
pub fn post_request() -> ExecuteRequest {
    ScriptCall::post("api/users.php")
        .form("name", "John Doe")
        .form("email", "john@example.com")
        .server_var("HTTP_AUTHORIZATION", "Bearer token123")
        .cookie("session_id", "abc123")
        .build()
}

pub fn stream_request() -> ExecuteRequest {
    ScriptCall::get("stream.php").build()
}

fn report<W: Write>(out: &mut Transcript<W>, call: &str, err: &RpcError) -> io::Result<bool> {
    warn!(call, code = ?err.code(), "Call failed: {}", err.message());
    out.error(err)?;
    Ok(false)
}

async fn health_check<A: PhpServiceApi, W: Write>(
    api: &mut A,
    out: &mut Transcript<W>,
) -> io::Result<bool> {
    out.section(1, "Health Check")?;

    let request = HealthCheckRequest {
        service: String::new(),
    };
    let ok = match api.check(request).await {
        Ok(response) => {
            out.field("Status", StatusLabel(response.status))?;
            true
        }
        Err(e) => report(out, "Check", &e)?,
    };

    out.blank()?;
    Ok(ok)
}

async fn execute_get<A: PhpServiceApi, W: Write>(
    api: &mut A,
    out: &mut Transcript<W>,
) -> io::Result<bool> {
    out.section(2, "Execute Script")?;

    let ok = match api.execute(get_request()).await {
        Ok(response) => {
            // Sorted for a stable transcript
            let headers: BTreeMap<_, _> = response.headers.iter().collect();

            out.field("Status Code", response.status_code)?;
            out.field("Headers", format_args!("{:?}", headers))?;
            out.field("Body length", format_args!("{} bytes", response.body.len()))?;

            if let Some(metadata) = &response.metadata {
                out.field("Request ID", &metadata.request_id)?;
                out.field(
                    "Execution time",
                    format_args!("{}µs", metadata.execution_time_us),
                )?;
            }
            true
        }
        Err(e) => report(out, "Execute", &e)?,
    };

    out.blank()?;
    Ok(ok)
}

async fn execute_post<A: PhpServiceApi, W: Write>(
    api: &mut A,
    out: &mut Transcript<W>,
) -> io::Result<bool> {
    out.section(3, "Execute POST Request")?;

    let ok = match api.execute(post_request()).await {
        Ok(response) => {
            let body = String::from_utf8_lossy(&response.body);
            let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();

            out.field("Status Code", response.status_code)?;
            out.field("Body", format_args!("{}...", preview))?;
            true
        }
        Err(e) => report(out, "Execute", &e)?,
    };

    out.blank()?;
    Ok(ok)
}

async fn execute_stream<A: PhpServiceApi, W: Write>(
    api: &mut A,
    out: &mut Transcript<W>,
) -> io::Result<bool> {
    out.section(4, "Streaming Response")?;

    let chunks = match api.execute_stream(stream_request()).await {
        Ok(chunks) => chunks,
        Err(e) => {
            let ok = report(out, "ExecuteStream", &e)?;
            out.blank()?;
            return Ok(ok);
        }
    };

    let mut bounded = BoundedStream::new(chunks, STREAM_CHUNK_LIMIT);
    let mut ok = true;

    while let Some(item) = bounded.next().await {
        match item {
            Ok(chunk) => {
                out.field(
                    format_args!("Chunk {}", chunk.sequence),
                    format_args!("{} bytes, final={}", chunk.data.len(), chunk.is_final),
                )?;
            }
            Err(status) => {
                ok = report(out, "ExecuteStream", &RpcError::from(status))?;
            }
        }
    }
    bounded.finish();

    out.blank()?;
    Ok(ok)
}
