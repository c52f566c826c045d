//! RPC client for JSON method calls over a WebSocket connection.
//!
//! This module provides `RpcClient`, an async client that holds exactly one
//! WebSocket connection and exposes raw send/receive plus a job status poll
//! loop built on top of them.

use std::time::Duration;

use serde::Serialize;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info};
use url::Url;

use crate::envelope::{job_query_params, MethodCall, Response, JOB_QUERY_METHOD};
use crate::models::{JobQueryResponse, JobState};
use crate::rpc::error::{ReceiveError, RpcError};
use crate::rpc::frame::{read_message, write_message};

/// Delay before every job status query, including the first.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Environment variable consulted by [`default_endpoint`].
pub const ENDPOINT_ENV_VAR: &str = "WSRPC_URL";

/// Endpoint used when [`ENDPOINT_ENV_VAR`] is unset.
pub const FALLBACK_ENDPOINT: &str = "ws://127.0.0.1/websocket";

/// Resolve the default endpoint URL.
///
/// Resolution order:
/// 1. `$WSRPC_URL`
/// 2. `ws://127.0.0.1/websocket` (fallback)
///
/// # Errors
///
/// Returns an error if `$WSRPC_URL` is set but not a valid URL.
pub fn default_endpoint() -> Result<Url, url::ParseError> {
    match std::env::var(ENDPOINT_ENV_VAR) {
        Ok(value) => Url::parse(&value),
        Err(_) => Url::parse(FALLBACK_ENDPOINT),
    }
}

/// RPC client bound to a single WebSocket connection.
///
/// The client does no request/response correlation: `receive()` returns
/// whatever frame arrives next, and `poll_job_status()` trusts the next
/// frame after each query to be its answer. Callers that keep several calls
/// in flight must match ids themselves.
///
/// All methods take `&mut self`. Sharing a client between tasks requires an
/// external mutex.
///
/// # Example
///
/// ```ignore
/// use wsrpc::rpc::RpcClient;
/// use serde_json::json;
///
/// let mut client = RpcClient::connect("ws://nas.local/websocket").await?;
///
/// let id = client.send("pool.dataset.query", json!([])).await?;
/// let response = client.receive().await?;
///
/// client.poll_job_status(42).await?;
/// client.close().await;
/// ```
pub struct RpcClient {
    /// The one connection this client owns.
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    /// Delay before each job status query.
    poll_interval: Duration,
}

impl RpcClient {
    /// Connect to the WebSocket endpoint at `url` with default settings.
    ///
    /// No retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Connection` if the URL is invalid, the endpoint is
    /// unreachable or refuses the connection, or the handshake fails.
    pub async fn connect(url: &str) -> Result<Self, RpcError> {
        let (stream, _response) = connect_async(url).await.map_err(RpcError::Connection)?;
        info!("Connected to {}", url);

        Ok(Self {
            stream,
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    /// Current delay before each job status query.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Set the delay before each job status query.
    ///
    /// Default is 2 seconds.
    pub fn set_poll_interval(&mut self, interval: Duration) {
        self.poll_interval = interval;
    }

    /// Send a method call and return its freshly generated request id.
    ///
    /// The id is only handed back; it is not remembered or matched against
    /// later responses.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Send` if `params` cannot be serialized or the write
    /// fails. The connection is left as the transport left it.
    pub async fn send<P: Serialize>(&mut self, method: &str, params: P) -> Result<String, RpcError> {
        let call = MethodCall::new(method, params);
        write_message(&mut self.stream, &call).await?;
        debug!(id = %call.id, method, "sent method call");

        Ok(call.id)
    }

    /// Wait for the next frame and decode it as a generic JSON object.
    ///
    /// No timeout is applied.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Receive` on malformed JSON, a non-object frame,
    /// a transport read failure, or peer close.
    pub async fn receive(&mut self) -> Result<Response, RpcError> {
        Ok(read_message(&mut self.stream).await?)
    }

    /// Poll `core.job.query` until the job reaches `SUCCESS` or `FAILED`.
    ///
    /// Each iteration sleeps for the poll interval, sends a query with a
    /// fresh id, and reads exactly one frame. An empty result or any state
    /// other than `SUCCESS`/`FAILED` keeps the loop going. There is no
    /// iteration limit and no timeout; see
    /// [`poll_job_status_with_deadline`](Self::poll_job_status_with_deadline)
    /// for a bounded variant.
    ///
    /// Returns `JobState::Success` on success.
    ///
    /// # Errors
    ///
    /// - `RpcError::JobFailed` if the remote reports `FAILED`, carrying its
    ///   error text
    /// - `RpcError::Poll` on the first send or receive failure; the loop is
    ///   not retried
    pub async fn poll_job_status(&mut self, job_id: i64) -> Result<JobState, RpcError> {
        loop {
            tokio::time::sleep(self.poll_interval).await;

            self.send(JOB_QUERY_METHOD, job_query_params(job_id))
                .await
                .map_err(|e| RpcError::poll(job_id, e))?;

            let response = self
                .receive()
                .await
                .map_err(|e| RpcError::poll(job_id, e))?;

            let status = JobQueryResponse::try_from(response)
                .map_err(|e| RpcError::poll(job_id, ReceiveError::Decode(e)))?;

            let Some(job) = status.first() else {
                debug!(job_id, "job query returned no records");
                continue;
            };

            match job.state {
                Some(JobState::Success) => {
                    debug!(job_id, "job succeeded");
                    return Ok(JobState::Success);
                }
                Some(JobState::Failed) => {
                    return Err(RpcError::JobFailed {
                        job_id,
                        message: job.error.clone().unwrap_or_default(),
                    });
                }
                state => {
                    debug!(job_id, state = ?state, "job still in progress");
                }
            }
        }
    }

    /// Like [`poll_job_status`](Self::poll_job_status), bounded by `deadline`.
    ///
    /// If the deadline elapses mid round trip, the query may already be on
    /// the wire and its reply will be the next frame `receive()` returns.
    ///
    /// # Errors
    ///
    /// Everything `poll_job_status` returns, plus `RpcError::Timeout` once
    /// the deadline elapses.
    pub async fn poll_job_status_with_deadline(
        &mut self,
        job_id: i64,
        deadline: Duration,
    ) -> Result<JobState, RpcError> {
        match tokio::time::timeout(deadline, self.poll_job_status(job_id)).await {
            Ok(result) => result,
            Err(_) => Err(RpcError::Timeout {
                job_id,
                after: deadline,
            }),
        }
    }

    /// Close the connection.
    ///
    /// The client stays usable as a value; later sends and receives surface
    /// the transport's error.
    pub async fn close(&mut self) {
        if let Err(e) = self.stream.close(None).await {
            debug!("close failed: {}", e);
        }
    }
}
