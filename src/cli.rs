//! # CLI
//!
//! Command-line interface of `wsrpc`, defined with `clap`.
//!
//! Parsing validates the endpoint URL and JSON params before any connection
//! is attempted.
use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser)]
#[command(name = "wsrpc", version, about = "JSON-over-WebSocket RPC client")]
pub struct Cli {
    /// WebSocket endpoint (e.g. ws://127.0.0.1/websocket). Defaults to $WSRPC_URL
    #[arg(long, global = true)]
    pub url: Option<Url>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one method call and print the next frame received
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// wsrpc --url ws://nas.local/websocket call system.info
    /// wsrpc call pool.dataset.query --params '[[["name", "=", "tank"]]]'
    /// ```
    Call {
        /// Method name (e.g. system.info)
        method: String,
        /// JSON params
        #[arg(long, value_parser = parse_params, default_value = "[]")]
        params: serde_json::Value,
    },

    /// Poll a job until it succeeds or fails
    WaitJob {
        /// Job id
        job_id: i64,
        /// Seconds to wait before each status query
        #[arg(long, default_value_t = 2)]
        interval: u64,
        /// Give up after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

fn parse_params(value: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(value).map_err(|e| format!("Invalid JSON: {e}"))
}
