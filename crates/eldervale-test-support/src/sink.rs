//! Test sink — captures turn records instead of logging them.

use std::sync::Mutex;

use eldervale_core::turn::{TurnRecord, TurnSink};

/// A turn sink that keeps every record it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingTurnSink {
    records: Mutex<Vec<TurnRecord>>,
}

impl RecordingTurnSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all records received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn records(&self) -> Vec<TurnRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl TurnSink for RecordingTurnSink {
    fn record(&self, record: &TurnRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}
