//! Command handlers for the narrator.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: look up the session, run the command, report
//! the outcome.

use eldervale_core::clock::Clock;
use eldervale_core::command::Command;
use eldervale_core::error::DomainError;
use eldervale_core::turn::TurnSink;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::application::registry::SessionRegistry;
use crate::domain::aggregates::NarrativeSession;
use crate::domain::commands::{AdvanceTurn, EndSession, StartSession};
use crate::domain::config::SessionConfig;
use crate::domain::memory::DEFAULT_PLAYER_NAME;
use crate::domain::schedule::Step;

/// Result of a successfully played turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    /// The session that advanced.
    pub session_id: Uuid,
    /// The turn index after the advance.
    pub turn_index: u32,
    /// The step that ran.
    pub step: Step,
    /// The narration to speak.
    pub narration: String,
    /// Whether the final scene has been reached.
    pub complete: bool,
}

/// Handles the `StartSession` command: creates a session at turn 0 with a
/// fresh memory record and registers it.
///
/// # Errors
///
/// Returns `DomainError::Validation` if a blank player name is supplied.
/// Returns `DomainError::Infrastructure` if the registry is unavailable.
pub fn handle_start_session(
    command: &StartSession,
    config: SessionConfig,
    registry: &SessionRegistry,
) -> Result<Uuid, DomainError> {
    let player_name = match command.player_name.as_deref().map(str::trim) {
        Some("") => {
            return Err(DomainError::Validation(
                "player_name must not be blank".to_owned(),
            ));
        }
        Some(name) => name.to_owned(),
        None => DEFAULT_PLAYER_NAME.to_owned(),
    };

    let session = NarrativeSession::new(Uuid::new_v4(), player_name, config);
    let session_id = registry.insert(session)?;

    info!(
        correlation_id = %command.correlation_id(),
        command = command.command_type(),
        %session_id,
        max_turns = config.max_turns(),
        "session started"
    );

    Ok(session_id)
}

/// Handles the `AdvanceTurn` command: plays exactly one turn of the session.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session is not live.
/// Returns `DomainError::Infrastructure` if the registry is unavailable.
pub fn handle_advance_turn(
    command: &AdvanceTurn,
    clock: &dyn Clock,
    sink: &dyn TurnSink,
    registry: &SessionRegistry,
) -> Result<TurnOutcome, DomainError> {
    registry.with_session(command.session_id, |session| {
        let played = session.play_turn(&command.utterance, clock, sink);
        TurnOutcome {
            session_id: command.session_id,
            turn_index: session.turn_index(),
            step: played.step,
            narration: played.narration,
            complete: session.is_complete(),
        }
    })
}

/// Handles the `EndSession` command: drops the session and its memory.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session is not live.
/// Returns `DomainError::Infrastructure` if the registry is unavailable.
pub fn handle_end_session(
    command: &EndSession,
    registry: &SessionRegistry,
) -> Result<(), DomainError> {
    let session = registry.remove(command.session_id)?;

    info!(
        correlation_id = %command.correlation_id(),
        command = command.command_type(),
        session_id = %session.id,
        turns_played = session.turn_index(),
        "session ended"
    );

    Ok(())
}
