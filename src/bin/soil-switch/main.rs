mod args;

use std::{io, process::ExitCode};

use anyhow::{Context as _, Result};
use args::{Args, Command};
use clap::Parser as _;
use soil_monitoring::api::{Client, ClientConfig};
use tokio::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let client = Client::new(ClientConfig {
        base_url: args.base_url,
        request_timeout: args.request_timeout_secs.map(Duration::from_secs),
    })
    .context("failed to create sensor API client")?;

    debug!(base_url = %client.base_url(), command = ?args.command, "running switch command");

    match args.command {
        Command::Mode => {
            let mode = client.get_mode().await.context("failed to get mode")?;
            println!("{}", mode.mode);
        }
        Command::SetMode { mode } => {
            let mode = client
                .set_mode(&mode)
                .await
                .with_context(|| format!("failed to set mode to {mode}"))?;
            println!("mode: {}", mode.mode);
        }
        Command::Manual { state } => {
            let ack = client
                .set_manual_state(&state)
                .await
                .with_context(|| format!("failed to switch manual state to {state}"))?;
            match ack.message {
                Some(message) => println!("{message}"),
                None => println!("state: {}", ack.state),
            }
        }
    }

    Ok(())
}
