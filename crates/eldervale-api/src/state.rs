//! Shared application state.

use std::sync::Arc;

use eldervale_core::clock::Clock;
use eldervale_core::turn::TurnSink;
use eldervale_narrative::application::registry::SessionRegistry;
use eldervale_narrative::domain::config::SessionConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Live sessions, one per connection.
    pub registry: Arc<SessionRegistry>,
    /// Clock used to stamp turn records.
    pub clock: Arc<dyn Clock>,
    /// Destination for per-turn records.
    pub turn_sink: Arc<dyn TurnSink>,
    /// Configuration applied to every new session.
    pub session_config: SessionConfig,
}

impl AppState {
    /// Create new application state with an empty registry.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        turn_sink: Arc<dyn TurnSink>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            registry: Arc::new(SessionRegistry::new()),
            clock,
            turn_sink,
            session_config,
        }
    }
}
