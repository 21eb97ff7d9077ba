mod args;

use std::{io, process::ExitCode};

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use soil_monitoring::{
    api::{Client, ClientConfig},
    dashboard::{RefreshLoop, TextSink},
};
use tokio::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let config = ClientConfig {
        base_url: args.base_url,
        request_timeout: args.request_timeout_secs.map(Duration::from_secs),
    };
    let client = Client::new(config).context("failed to create sensor API client")?;

    info!(base_url = %client.base_url(), timezone = %args.timezone, "starting dashboard");

    let sink = TextSink::new(io::stdout());
    let mut refresh = RefreshLoop::new(client, sink, args.timezone)
        .with_period(Duration::from_secs(args.interval_secs));

    refresh
        .run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for Ctrl-C: {err}");
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(())
}
