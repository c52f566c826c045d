//! wsrpc - command-line front end for the WebSocket RPC client.
//!
//! Parses arguments, sets up logging, connects once, runs one command, and
//! closes the connection before exiting.

mod cli;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use wsrpc::rpc::{default_endpoint, RpcClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "wsrpc=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = Cli::parse();

    let url = match args.url {
        Some(url) => url,
        None => default_endpoint().context("Invalid endpoint in $WSRPC_URL")?,
    };

    let mut client = RpcClient::connect(url.as_str())
        .await
        .with_context(|| format!("Could not connect to {url}"))?;

    let result = run(&mut client, args.command).await;
    client.close().await;
    result
}

async fn run(client: &mut RpcClient, command: Commands) -> Result<()> {
    match command {
        Commands::Call { method, params } => {
            let id = client.send(&method, &params).await?;
            let response = client.receive().await?;

            let output = json!({ "id": id, "response": response });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::WaitJob {
            job_id,
            interval,
            timeout,
        } => {
            client.set_poll_interval(Duration::from_secs(interval));
            let state = match timeout {
                Some(secs) => {
                    client
                        .poll_job_status_with_deadline(job_id, Duration::from_secs(secs))
                        .await?
                }
                None => client.poll_job_status(job_id).await?,
            };
            println!("{state}");
        }
    }

    Ok(())
}
