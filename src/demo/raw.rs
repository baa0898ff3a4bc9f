//! Raw-mode demonstration: one health probe without bindings.

use std::io::{self, Write};

use bytes::Bytes;
use tracing::warn;

use crate::grpc::{bindings_available, RawCall, WireMethod};

use super::transcript::Transcript;
use super::Tally;

/// Probe `Check` with an empty payload and print the raw response bytes.
///
/// The response is not interpreted, only rendered as hex.
pub async fn run<R, W>(invoker: &mut R, out: &mut Transcript<W>) -> io::Result<Tally>
where
    R: RawCall,
    W: Write,
{
    let mut tally = Tally::default();

    if bindings_available() {
        out.line("Raw invocation forced (GRPC_RAW or --raw).")?;
    } else {
        out.line("Generated bindings are not compiled in. Rebuild with:")?;
        out.line("  cargo build --features bindings")?;
    }
    out.blank()?;

    out.line("Attempting raw gRPC health check...")?;
    out.blank()?;

    let method = WireMethod::CHECK;
    match invoker.unary(method, Bytes::new()).await {
        Ok(response) => {
            tally.succeeded += 1;
            out.line(format_args!("Raw response: {}", hex::encode(&response)))?;
        }
        Err(e) => {
            tally.failed += 1;
            warn!(method = %method, code = ?e.code(), "Raw call failed: {}", e.message());
            out.line(format_args!("Error: {}", e))?;
        }
    }

    Ok(tally)
}
