//! Structured logging of session events
//!
//! Session mutations (login, signup completion, logout, key generation) are
//! recorded as serializable events. Every event is emitted through tracing;
//! when a log path is configured the event is also appended as one JSON line
//! so the demo keeps an inspectable trail across restarts.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::OrpheusResult;

/// Kind of session mutation being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEventKind {
    Login,
    SignupCompleted,
    Logout,
    KeysGenerated,
}

/// A structured record of one session mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEvent {
    pub kind: SessionEventKind,
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl SessionEvent {
    pub fn new(kind: SessionEventKind, detail: Option<String>) -> Self {
        Self {
            kind,
            detail,
            timestamp: Utc::now(),
        }
    }

    /// Append this event as one JSON line to `path`.
    pub fn append_jsonl(&self, path: &Path) -> OrpheusResult<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let line = serde_json::to_string(self)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

/// Emit a session event. A sink failure is logged and swallowed; recording
/// must never fail the mutation it describes.
pub fn record(log_path: Option<&Path>, kind: SessionEventKind, detail: Option<&str>) {
    let event = SessionEvent::new(kind, detail.map(str::to_string));
    tracing::info!(
        event = ?event.kind,
        detail = event.detail.as_deref().unwrap_or(""),
        "session event"
    );
    if let Some(path) = log_path {
        if let Err(e) = event.append_jsonl(path) {
            tracing::warn!(error = %e, path = %path.display(), "failed to append session event");
        }
    }
}
