//! W3C Trace Context propagation for outgoing calls.
//!
//! Every typed call carries a `traceparent` so the server can correlate its
//! logs with the client run:
//! <https://www.w3.org/TR/trace-context/>
//!
//! Format: `traceparent: {version}-{trace-id}-{parent-id}-{trace-flags}`

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use tonic::metadata::{MetadataMap, MetadataValue};

/// W3C Trace Context version (always 00 for the current W3C version).
const TRACE_VERSION: &str = "00";

/// Trace flags: sampled (01) or not sampled (00).
const FLAG_SAMPLED: u8 = 0x01;

/// Metadata key used on the wire.
pub const TRACEPARENT_KEY: &str = "traceparent";

/// Trace context for one client run and the calls made within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// 16-byte trace ID as 32 hex chars
    pub trace_id: String,
    /// 8-byte span ID as 16 hex chars
    pub span_id: String,
    /// Trace flags (bit 0 = sampled)
    pub flags: u8,
}

impl TraceContext {
    /// Start a new sampled trace.
    pub fn new() -> Self {
        Self {
            trace_id: generate_trace_id(),
            span_id: generate_span_id(),
            flags: FLAG_SAMPLED,
        }
    }

    /// Continue a trace handed in by the environment (`TRACEPARENT`),
    /// or start a new one.
    pub fn from_env() -> Self {
        std::env::var("TRACEPARENT")
            .ok()
            .and_then(|v| Self::parse(&v))
            .unwrap_or_else(Self::new)
    }

    /// Span for a single outgoing call within this trace.
    pub fn child(&self) -> Self {
        Self {
            trace_id: self.trace_id.clone(),
            span_id: generate_span_id(),
            flags: self.flags,
        }
    }

    /// Parse a W3C traceparent value. Returns None for malformed input.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().split('-');
        let (version, trace_id, span_id, flags) =
            (parts.next()?, parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() || version != TRACE_VERSION {
            return None;
        }

        if !is_hex_id(trace_id, 32) || !is_hex_id(span_id, 16) {
            return None;
        }
        if flags.len() != 2 {
            return None;
        }
        let flags = u8::from_str_radix(flags, 16).ok()?;

        Some(Self {
            trace_id: trace_id.to_lowercase(),
            span_id: span_id.to_lowercase(),
            flags,
        })
    }

    /// Format as W3C traceparent value.
    pub fn to_traceparent(&self) -> String {
        format!(
            "{}-{}-{}-{:02x}",
            TRACE_VERSION, self.trace_id, self.span_id, self.flags
        )
    }

    /// Attach this context to outgoing call metadata.
    pub fn inject(&self, metadata: &mut MetadataMap) {
        // Hex-only content always forms a valid ASCII value
        if let Ok(value) = MetadataValue::try_from(self.to_traceparent()) {
            metadata.insert(TRACEPARENT_KEY, value);
        }
    }

    #[inline]
    pub fn is_sampled(&self) -> bool {
        self.flags & FLAG_SAMPLED != 0
    }
}

impl Default for TraceContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_traceparent())
    }
}

/// Counter for unique IDs within the same clock tick.
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

fn clock_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// 32-char hex trace ID from the clock mixed with a counter.
fn generate_trace_id() -> String {
    let ts = clock_nanos();
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed);

    let high = ts ^ counter.wrapping_mul(0x517cc1b727220a95);
    let low = (counter ^ ts.wrapping_mul(0x2545f4914f6cdd1d)) | 1;

    format!("{:016x}{:016x}", high, low)
}

/// 16-char hex span ID.
fn generate_span_id() -> String {
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    let id = (clock_nanos() ^ counter.wrapping_mul(0x9e3779b97f4a7c15)) | 1;

    format!("{:016x}", id)
}

/// Exact-length hex string that is not all zeros.
fn is_hex_id(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_hexdigit()) && s.chars().any(|c| c != '0')
}
