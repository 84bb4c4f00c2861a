//! The voice turn loop for one connection.
//!
//! Library entry point for a real-time voice adapter; the HTTP server takes
//! one turn per request instead and does not use it.

use eldervale_core::clock::Clock;
use eldervale_core::error::DomainError;
use eldervale_core::turn::TurnSink;
use eldervale_core::voice::{NarrationOutput, UtteranceFeed};
use tracing::{debug, info};

use crate::domain::aggregates::NarrativeSession;

/// Drives a session from a voice connection until the feed closes.
///
/// The narrator speaks first: the opening turn is played with an empty
/// utterance before anything is read from the feed. After that, each
/// finalized utterance plays exactly one turn, and the next utterance is
/// not read until the narration has been handed to `output`. Turns past the
/// final scene keep replaying it; ending the story is the caller's choice.
///
/// Returns the number of turns played.
///
/// # Errors
///
/// Returns the output's error if narration cannot be delivered. The turn
/// that produced it has already been played.
pub async fn run_voice_session(
    session: &mut NarrativeSession,
    feed: &mut dyn UtteranceFeed,
    output: &dyn NarrationOutput,
    clock: &dyn Clock,
    sink: &dyn TurnSink,
) -> Result<u32, DomainError> {
    info!(session_id = %session.id, "voice session starting");

    let mut turns_played = 0u32;
    let mut utterance = String::new();
    loop {
        let narration = session.advance_turn(&utterance, clock, sink);
        turns_played += 1;
        output.speak(&narration).await?;

        match feed.next_utterance().await {
            Some(next) => {
                debug!(session_id = %session.id, chars = next.chars().count(), "utterance received");
                utterance = next;
            }
            None => break,
        }
    }

    info!(session_id = %session.id, turns_played, "voice session closed");
    Ok(turns_played)
}
