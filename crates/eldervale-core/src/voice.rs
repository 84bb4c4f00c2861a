//! Boundary traits for the voice channel.
//!
//! Transcription, synthesis and turn detection live outside the narrator.
//! The narrator only sees finalized utterances coming in and narration text
//! going out.

use async_trait::async_trait;

use crate::error::DomainError;

/// Source of finalized player utterances for one connection.
///
/// Implementations deliver an utterance only after end-of-turn has been
/// detected; interim transcripts never reach the narrator.
#[async_trait]
pub trait UtteranceFeed: Send {
    /// Waits for the next finalized utterance. Returns `None` once the
    /// connection has closed.
    async fn next_utterance(&mut self) -> Option<String>;
}

/// Destination for narration text, typically a speech synthesizer.
#[async_trait]
pub trait NarrationOutput: Send + Sync {
    /// Hands one narration to the output.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the output cannot accept it.
    async fn speak(&self, narration: &str) -> Result<(), DomainError>;
}
