//! Test voice collaborators — scripted input and recorded output.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use eldervale_core::error::DomainError;
use eldervale_core::voice::{NarrationOutput, UtteranceFeed};

/// An utterance feed that replays a fixed script, then reports the
/// connection as closed.
#[derive(Debug)]
pub struct ScriptedUtteranceFeed {
    remaining: VecDeque<String>,
}

impl ScriptedUtteranceFeed {
    /// Create a feed that yields `utterances` in order.
    #[must_use]
    pub fn new<I, S>(utterances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            remaining: utterances.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl UtteranceFeed for ScriptedUtteranceFeed {
    async fn next_utterance(&mut self) -> Option<String> {
        self.remaining.pop_front()
    }
}

/// A narration output that records everything it is asked to speak.
#[derive(Debug, Default)]
pub struct RecordingNarrationOutput {
    spoken: Mutex<Vec<String>>,
}

impl RecordingNarrationOutput {
    /// Create an empty recording output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every narration spoken so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrationOutput for RecordingNarrationOutput {
    async fn speak(&self, narration: &str) -> Result<(), DomainError> {
        self.spoken.lock().unwrap().push(narration.to_owned());
        Ok(())
    }
}

/// A narration output that always fails. Useful for testing error paths.
#[derive(Debug)]
pub struct FailingNarrationOutput;

#[async_trait]
impl NarrationOutput for FailingNarrationOutput {
    async fn speak(&self, _narration: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("synthesizer unavailable".into()))
    }
}
