//! Commands for the narrator.

use eldervale_core::command::Command;
use uuid::Uuid;

/// Command to open a new session for a freshly connected player.
#[derive(Debug, Clone)]
pub struct StartSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The player's name; the default name is used when absent.
    pub player_name: Option<String>,
}

impl Command for StartSession {
    fn command_type(&self) -> &'static str {
        "narrative.start_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to play one turn with the player's finalized utterance.
#[derive(Debug, Clone)]
pub struct AdvanceTurn {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to advance.
    pub session_id: Uuid,
    /// What the player said. Empty for silence.
    pub utterance: String,
}

impl Command for AdvanceTurn {
    fn command_type(&self) -> &'static str {
        "narrative.advance_turn"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to drop a session once its connection closes.
#[derive(Debug, Clone)]
pub struct EndSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session to end.
    pub session_id: Uuid,
}

impl Command for EndSession {
    fn command_type(&self) -> &'static str {
        "narrative.end_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
