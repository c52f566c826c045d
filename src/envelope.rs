//! Wire envelopes for the JSON-over-WebSocket RPC protocol.
//!
//! Every outbound frame is a single JSON object:
//!
//! ```text
//! {"id": "<uuid>", "msg": "method", "method": "<name>", "params": <any JSON>}
//! ```
//!
//! Inbound frames are decoded generically into [`Response`]; typed views over
//! specific responses live in [`crate::models`].

use serde::Serialize;
use serde_json::{json, Map, Value};
use uuid::Uuid;

/// Value of the `msg` field on every method call.
pub const METHOD_MSG: &str = "method";

/// Method used to query job status.
pub const JOB_QUERY_METHOD: &str = "core.job.query";

/// A decoded inbound frame. No schema is enforced at this layer.
pub type Response = Map<String, Value>;

/// Outbound method call envelope.
///
/// The `id` is generated fresh for every envelope. It is handed back to the
/// caller for out-of-band correlation; nothing in this crate matches it
/// against a later response.
#[derive(Debug, Clone, Serialize)]
pub struct MethodCall<'a, P> {
    pub id: String,
    pub msg: &'static str,
    pub method: &'a str,
    pub params: P,
}

impl<'a, P: Serialize> MethodCall<'a, P> {
    /// Build a call to `method` with a fresh UUID v4 id.
    pub fn new(method: &'a str, params: P) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            msg: METHOD_MSG,
            method,
            params,
        }
    }
}

/// Filter list selecting a single job by id: `[["id", "=", job_id]]`.
pub fn job_query_params(job_id: i64) -> Value {
    json!([["id", "=", job_id]])
}
