//! Error types for the RPC client.

use std::time::Duration;

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Failure while writing a method call.
#[derive(Debug, Error)]
pub enum SendError {
    /// The envelope could not be serialized to JSON.
    #[error("encoding failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The transport rejected the write.
    #[error("transport error: {0}")]
    Transport(#[source] tungstenite::Error),
}

/// Failure while reading a response frame.
#[derive(Debug, Error)]
pub enum ReceiveError {
    /// The frame was not a JSON object.
    #[error("decoding failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// The transport failed while reading.
    #[error("transport error: {0}")]
    Transport(#[source] tungstenite::Error),

    /// The peer closed the connection, with its close reason if it sent one.
    #[error("connection closed by peer{}", .0.as_deref().map(|r| format!(": {r}")).unwrap_or_default())]
    Closed(Option<String>),
}

/// RPC client error types.
///
/// Every failure is returned to the immediate caller. Nothing is retried and
/// the client is never marked dead; further calls may be attempted.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Dialing the endpoint failed.
    #[error("Failed to connect to WebSocket: {0}")]
    Connection(#[source] tungstenite::Error),

    /// Encoding or writing a method call failed.
    #[error("Failed to send message: {0}")]
    Send(#[from] SendError),

    /// Reading or decoding a response failed.
    #[error("Failed to read response: {0}")]
    Receive(#[from] ReceiveError),

    /// The remote side reported the job as `FAILED`.
    #[error("Job {job_id} failed: {message}")]
    JobFailed {
        /// Polled job id
        job_id: i64,
        /// Error text supplied by the remote side
        message: String,
    },

    /// A send or receive inside the job poll loop failed.
    #[error("Failed to poll job {job_id}: {source}")]
    Poll {
        /// Polled job id
        job_id: i64,
        /// The underlying send or receive failure
        #[source]
        source: Box<RpcError>,
    },

    /// The job did not finish before the caller's deadline.
    #[error("Job {job_id} still running after {}s", .after.as_secs())]
    Timeout {
        /// Polled job id
        job_id: i64,
        /// Deadline that elapsed
        after: Duration,
    },
}

impl RpcError {
    /// Wrap a transport failure that happened inside the poll loop.
    pub(crate) fn poll(job_id: i64, source: impl Into<RpcError>) -> Self {
        RpcError::Poll {
            job_id,
            source: Box::new(source.into()),
        }
    }
}
