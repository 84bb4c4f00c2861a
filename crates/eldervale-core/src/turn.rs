//! Per-turn observability records.
//!
//! Every completed turn produces exactly one [`TurnRecord`], which the
//! session hands to an injected [`TurnSink`]. The core never reaches for a
//! process-wide logger on its own.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Structured summary of one completed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    /// The session that advanced.
    pub session_id: Uuid,
    /// The turn index after the advance (first turn is 1).
    pub turn_index: u32,
    /// Stable name of the narrative step that ran.
    pub step: &'static str,
    /// The narration text returned to the caller.
    pub narration: String,
    /// When the turn completed.
    pub occurred_at: DateTime<Utc>,
}

/// Receives one record per completed turn.
pub trait TurnSink: Send + Sync {
    /// Records a completed turn. Must not block.
    fn record(&self, record: &TurnRecord);
}

/// Production sink that emits each turn as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTurnSink;

impl TurnSink for TracingTurnSink {
    fn record(&self, record: &TurnRecord) {
        tracing::info!(
            session_id = %record.session_id,
            turn_index = record.turn_index,
            step = record.step,
            narration = %record.narration,
            "narrator turn completed"
        );
    }
}
