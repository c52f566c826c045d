//! JSON message framing over WebSocket.
//!
//! One JSON object per WebSocket data frame. Outbound messages are always
//! text frames; inbound text and binary frames are both accepted.
//!
//! Control frames never surface to callers: pings are answered by the
//! transport, pongs and raw frames are skipped.

use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;
use tracing::trace;

use crate::envelope::Response;
use crate::rpc::error::{ReceiveError, SendError};

/// Serialize `body` as JSON and write it as a single text frame.
///
/// # Errors
///
/// Returns an error if:
/// - `body` cannot be serialized (`SendError::Encode`)
/// - The write or flush fails (`SendError::Transport`)
pub async fn write_message<S, T>(stream: &mut WebSocketStream<S>, body: &T) -> Result<(), SendError>
where
    S: AsyncRead + AsyncWrite + Unpin,
    T: Serialize + ?Sized,
{
    let text = serde_json::to_string(body).map_err(SendError::Encode)?;
    trace!(bytes = text.len(), "writing frame");

    stream
        .send(Message::text(text))
        .await
        .map_err(SendError::Transport)
}

/// Wait for the next data frame and decode it as a JSON object.
///
/// No timeout is applied; this waits for as long as the peer stays silent.
///
/// # Errors
///
/// Returns an error if:
/// - The peer sent a close frame or the stream ended (`ReceiveError::Closed`)
/// - The frame is not a JSON object (`ReceiveError::Decode`)
/// - The transport failed (`ReceiveError::Transport`)
pub async fn read_message<S>(stream: &mut WebSocketStream<S>) -> Result<Response, ReceiveError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    loop {
        match stream.next().await {
            Some(Ok(Message::Text(text))) => return decode(text.as_bytes()),
            Some(Ok(Message::Binary(data))) => return decode(&data),
            Some(Ok(Message::Close(frame))) => {
                return Err(ReceiveError::Closed(frame.map(|f| f.reason.to_string())));
            }
            Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_))) => continue,
            Some(Err(e)) => return Err(ReceiveError::Transport(e)),
            None => return Err(ReceiveError::Closed(None)),
        }
    }
}

fn decode(bytes: &[u8]) -> Result<Response, ReceiveError> {
    trace!(bytes = bytes.len(), "read frame");
    serde_json::from_slice(bytes).map_err(ReceiveError::Decode)
}
