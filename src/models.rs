//! Typed views over job status responses.
//!
//! A `core.job.query` reply is expected to look like
//! `{"result": [{"state": "...", "error": "..."}]}`. Only the first record is
//! ever consulted. Everything is optional on the wire, so every field here is
//! too.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::envelope::Response;

/// Job execution state.
///
/// Includes `Unknown` variant for forward-compatibility with new states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Waiting,
    Running,
    Success,
    Failed,
    Aborted,
    /// Forward-compatible fallback for unknown states
    #[serde(other)]
    Unknown,
}

impl JobState {
    /// Wire representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobState::Waiting => "WAITING",
            JobState::Running => "RUNNING",
            JobState::Success => "SUCCESS",
            JobState::Failed => "FAILED",
            JobState::Aborted => "ABORTED",
            JobState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single job entry from a `core.job.query` result.
///
/// Only the fields the poll loop reads are decoded; anything else the
/// remote sends (ids, progress, timestamps) is ignored whatever its type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub state: Option<JobState>,
    /// Remote error text, usually only present when the job failed.
    #[serde(default)]
    pub error: Option<String>,
}

/// Typed view of a `core.job.query` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobQueryResponse {
    #[serde(default)]
    pub result: Option<Vec<JobRecord>>,
}

impl JobQueryResponse {
    /// The first job record, if the result list is present and non-empty.
    pub fn first(&self) -> Option<&JobRecord> {
        self.result.as_deref().and_then(|records| records.first())
    }
}

impl TryFrom<Response> for JobQueryResponse {
    type Error = serde_json::Error;

    fn try_from(response: Response) -> Result<Self, Self::Error> {
        serde_json::from_value(Value::Object(response))
    }
}
