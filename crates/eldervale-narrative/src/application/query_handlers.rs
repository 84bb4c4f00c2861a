//! Query handlers for the narrator.
//!
//! This module contains query handlers that read a live session and return
//! read-only view DTOs.

use eldervale_core::error::DomainError;
use serde::Serialize;
use uuid::Uuid;

use crate::application::registry::SessionRegistry;
use crate::domain::aggregates::NarrativeSession;
use crate::domain::memory::PlayerMemory;
use crate::domain::schedule::Step;

/// Read-only view of a narrative session.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeSessionView {
    /// The session identifier.
    pub session_id: Uuid,
    /// Turns played so far.
    pub turn_index: u32,
    /// Turn at which the final scene starts.
    pub max_turns: u32,
    /// The step played on the most recent turn.
    pub current_step: Option<Step>,
    /// Whether the final scene has been reached.
    pub complete: bool,
    /// Snapshot of the player's memory.
    pub memory: PlayerMemory,
}

impl From<&NarrativeSession> for NarrativeSessionView {
    fn from(session: &NarrativeSession) -> Self {
        Self {
            session_id: session.id,
            turn_index: session.turn_index(),
            max_turns: session.config().max_turns(),
            current_step: session.current_step(),
            complete: session.is_complete(),
            memory: session.memory().clone(),
        }
    }
}

/// Retrieves a live session by its identifier.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session is not live.
/// Returns `DomainError::Infrastructure` if the registry is unavailable.
pub fn get_session_by_id(
    session_id: Uuid,
    registry: &SessionRegistry,
) -> Result<NarrativeSessionView, DomainError> {
    registry.with_session(session_id, |session| NarrativeSessionView::from(&*session))
}

#[cfg(test)]
mod tests {
    use eldervale_core::error::DomainError;
    use uuid::Uuid;

    use crate::application::query_handlers::get_session_by_id;
    use crate::application::registry::SessionRegistry;
    use crate::domain::aggregates::NarrativeSession;
    use crate::domain::config::SessionConfig;
    use eldervale_test_support::{RecordingTurnSink, fixed_clock};

    #[test]
    fn test_get_session_by_id_returns_view_with_memory() {
        // Arrange
        let registry = SessionRegistry::new();
        let mut session = NarrativeSession::new(Uuid::new_v4(), "Arin", SessionConfig::default());
        let sink = RecordingTurnSink::new();
        for utterance in ["", "hello Fenrix", "I grab the scrap", "I run"] {
            session.advance_turn(utterance, &fixed_clock(), &sink);
        }
        let session_id = registry.insert(session).unwrap();

        // Act
        let view = get_session_by_id(session_id, &registry).unwrap();

        // Assert
        assert_eq!(view.session_id, session_id);
        assert_eq!(view.turn_index, 4);
        assert_eq!(view.max_turns, 10);
        assert!(!view.complete);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["current_step"], "wolf_encounter");
        assert_eq!(json["memory"]["health"], 90);
        assert_eq!(json["memory"]["visited_places"], serde_json::json!(["Tavern", "Forest"]));
        assert_eq!(json["memory"]["inventory"], serde_json::json!(["Map Scrap"]));
        assert_eq!(json["memory"]["allies"], serde_json::json!(["Fenrix"]));
        assert_eq!(json["memory"]["past_actions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_get_session_by_id_before_first_turn_has_no_step() {
        let registry = SessionRegistry::new();
        let session = NarrativeSession::new(Uuid::new_v4(), "Arin", SessionConfig::default());
        let session_id = registry.insert(session).unwrap();

        let view = get_session_by_id(session_id, &registry).unwrap();

        assert_eq!(view.turn_index, 0);
        assert!(view.current_step.is_none());
    }

    #[test]
    fn test_get_session_by_id_returns_not_found_for_unknown_session() {
        // Arrange
        let registry = SessionRegistry::new();
        let session_id = Uuid::new_v4();

        // Act
        let result = get_session_by_id(session_id, &registry);

        // Assert
        match result.unwrap_err() {
            DomainError::SessionNotFound(id) => assert_eq!(id, session_id),
            other => panic!("expected SessionNotFound, got {other:?}"),
        }
    }
}
