use clap::Parser;
use tracing::{info, warn};

use tokio_php_client::config::Config;
use tokio_php_client::demo::{self, Transcript};
use tokio_php_client::{logging, VERSION};

/// gRPC demonstration client for a tokio_php server.
#[derive(Parser, Debug)]
#[command(name = "tokio_php_client", version, about)]
struct Args {
    /// Server address in host:port form (overrides GRPC_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Use the raw invocation path even when bindings are compiled in
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.client = config.client.with_target(host);
    }
    if args.raw {
        config.client = config.client.with_force_raw(true);
    }

    logging::init(&config.logging);
    info!("tokio_php_client {}", VERSION);
    config.log_summary();

    // A single connection and sequential calls need no worker threads
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let stdout = std::io::stdout();
    let mut transcript = Transcript::new(stdout.lock());
    let tally = runtime.block_on(demo::run(&config.client, &mut transcript))?;

    // Failed calls are reported in the transcript, not in the exit status
    if tally.failed > 0 {
        warn!(succeeded = tally.succeeded, failed = tally.failed, "Some calls failed");
    } else {
        info!(succeeded = tally.succeeded, "All calls succeeded");
    }

    Ok(())
}
