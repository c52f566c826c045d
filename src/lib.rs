//! wsrpc Library
//!
//! This library provides a minimal client for a JSON-over-WebSocket RPC
//! protocol:
//!
//! - `rpc` - WebSocket client, framing, and error types
//! - `envelope` - Outbound method call envelope and the generic response type
//! - `models` - Typed job status responses
//!
//! # RPC Module
//!
//! ```ignore
//! use wsrpc::rpc::{default_endpoint, RpcClient};
//!
//! let url = default_endpoint()?;
//! let mut client = RpcClient::connect(url.as_str()).await?;
//! let id = client.send("core.get_jobs", serde_json::json!([])).await?;
//! let response = client.receive().await?;
//! client.close().await;
//! ```

pub mod envelope;
pub mod models;
pub mod rpc;
