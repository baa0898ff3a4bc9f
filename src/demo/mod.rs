//! The demonstration sequence and its transcript.
//!
//! [`run`] opens the channel, picks the invocation mode once, runs the
//! matching call sequence and releases the channel.

mod raw;
mod transcript;
#[cfg(feature = "bindings")]
mod typed;

use std::error::Error;
use std::io::{self, Write};

use tonic::transport::Channel;
use tracing::info;

use crate::config::ClientConfig;
use crate::grpc::{ChannelManager, InvocationMode, RawInvoker};
#[cfg(feature = "bindings")]
use crate::grpc::TypedClient;

pub use transcript::Transcript;
#[cfg(feature = "bindings")]
pub use typed::{get_request, post_request, stream_request};

/// Calls that completed and calls that failed in one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub succeeded: usize,
    pub failed: usize,
}

impl Tally {
    fn record(&mut self, ok: bool) {
        if ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// The invocation path for a run. Only one is ever constructed.
pub enum Strategy {
    #[cfg(feature = "bindings")]
    Typed(TypedClient),
    Raw(RawInvoker),
}

impl Strategy {
    /// Build the path for `mode` over `channel`.
    ///
    /// Without compiled bindings every mode resolves to [`Strategy::Raw`].
    pub fn select(mode: InvocationMode, channel: Channel) -> Self {
        match mode {
            #[cfg(feature = "bindings")]
            InvocationMode::Typed => Self::Typed(TypedClient::new(channel)),
            _ => Self::Raw(RawInvoker::new(channel)),
        }
    }

    pub fn mode(&self) -> InvocationMode {
        match self {
            #[cfg(feature = "bindings")]
            Self::Typed(_) => InvocationMode::Typed,
            Self::Raw(_) => InvocationMode::Raw,
        }
    }

    /// Run the call sequence of this path.
    pub async fn run<W: Write>(self, out: &mut Transcript<W>) -> io::Result<Tally> {
        match self {
            #[cfg(feature = "bindings")]
            Self::Typed(mut client) => typed::run(&mut client, out).await,
            Self::Raw(mut invoker) => raw::run(&mut invoker, out).await,
        }
    }
}

/// Run the whole demonstration against `config.target`.
///
/// Individual call failures end up in the transcript and the tally. Only
/// an invalid endpoint or a transcript write error is returned as `Err`.
pub async fn run<W: Write>(
    config: &ClientConfig,
    out: &mut Transcript<W>,
) -> Result<Tally, Box<dyn Error + Send + Sync>> {
    out.header(&config.target)?;

    let manager = ChannelManager::open(config)?;
    let mode = InvocationMode::detect(config.force_raw);
    let target = manager.target().to_string();

    let transcript = &mut *out;
    let tally = manager
        .scoped(move |channel| async move {
            let strategy = Strategy::select(mode, channel);
            info!(mode = %strategy.mode(), target = %target, "Invocation mode selected");
            strategy.run(transcript).await
        })
        .await?;

    out.flush()?;
    Ok(tally)
}
