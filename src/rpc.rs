//! WebSocket RPC client.
//!
//! This module provides the client side of a JSON-over-WebSocket RPC
//! protocol: one connection, one JSON object per frame, and a job status
//! poll loop.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐          WebSocket           ┌─────────────────────┐
//! │     caller      │  ◄──────────────────────────►│    remote peer      │
//! │   (RpcClient)   │     one JSON object/frame    │                     │
//! └─────────────────┘                              └─────────────────────┘
//! ```
//!
//! # Protocol
//!
//! Outbound method calls:
//!
//! ```text
//! {"id":"1b4e28ba-2fa1-11d2-883f-0016d3cca427","msg":"method","method":"core.job.query","params":[["id","=",42]]}
//! ```
//!
//! Inbound frames are arbitrary JSON objects. Responses are not correlated
//! with requests; the next frame read is the one returned.
//!
//! # Usage
//!
//! ```ignore
//! use wsrpc::rpc::RpcClient;
//! use serde_json::json;
//!
//! let mut client = RpcClient::connect("ws://127.0.0.1/websocket").await?;
//! client.send("system.info", json!([])).await?;
//! let info = client.receive().await?;
//! ```

mod client;
mod error;
mod frame;

pub use client::{
    default_endpoint, RpcClient, DEFAULT_POLL_INTERVAL, ENDPOINT_ENV_VAR, FALLBACK_ENDPOINT,
};
pub use error::{ReceiveError, RpcError, SendError};
pub use frame::{read_message, write_message};
