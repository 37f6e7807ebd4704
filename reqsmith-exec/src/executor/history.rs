use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use reqsmith_core::types::{ExecuteRequest, ExecutionResult};

/// One executed request/result pair as handed to the history collaborator.
/// Serializable so sinks can persist entries as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub request: ExecuteRequest,
    pub result: ExecutionResult,
    /// The URL as actually sent, after variable resolution and query
    /// assembly; falls back to the raw input when building failed.
    pub resolved_url: String,
    pub executed_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
#[error("history sink error: {0}")]
pub struct HistoryError(pub String);

/// Fire-and-forget history recording. The executor dispatches entries on a
/// detached task; a failing sink is logged and never reaches the caller or
/// delays the already-computed result.
#[async_trait]
pub trait HistorySink: Send + Sync {
    async fn record(&self, entry: HistoryEntry) -> Result<(), HistoryError>;
}

pub struct NoOpHistorySink;

#[async_trait]
impl HistorySink for NoOpHistorySink {
    async fn record(&self, _entry: HistoryEntry) -> Result<(), HistoryError> {
        Ok(())
    }
}

/// Bounded-channel handoff to whoever owns the receiving end — typically a
/// persistence worker draining entries into storage. A full or closed
/// channel fails the record, which the executor logs and drops.
pub struct ChannelHistorySink {
    tx: tokio::sync::mpsc::Sender<HistoryEntry>,
}

impl ChannelHistorySink {
    pub fn new(capacity: usize) -> (Self, tokio::sync::mpsc::Receiver<HistoryEntry>) {
        let (tx, rx) = tokio::sync::mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait]
impl HistorySink for ChannelHistorySink {
    async fn record(&self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.tx
            .try_send(entry)
            .map_err(|e| HistoryError(e.to_string()))
    }
}
