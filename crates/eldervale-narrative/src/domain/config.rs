//! Per-session tunables.

use eldervale_core::error::DomainError;
use serde::Serialize;

/// Default number of turns before the final scene.
pub const DEFAULT_MAX_TURNS: u32 = 10;

/// Default maximum length, in characters, of a logged player action.
pub const DEFAULT_ACTION_LOG_LIMIT: usize = 80;

/// The only externally tunable parameters of a session. Narration text and
/// the turn schedule are fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionConfig {
    max_turns: u32,
    action_log_limit: usize,
}

impl SessionConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max_turns` is zero.
    pub fn new(max_turns: u32, action_log_limit: usize) -> Result<Self, DomainError> {
        if max_turns == 0 {
            return Err(DomainError::Validation(
                "max_turns must be at least 1".to_owned(),
            ));
        }
        Ok(Self {
            max_turns,
            action_log_limit,
        })
    }

    /// Turn at which the session reaches its final scene.
    #[must_use]
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Maximum characters kept from each logged utterance.
    #[must_use]
    pub fn action_log_limit(&self) -> usize {
        self.action_log_limit
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            action_log_limit: DEFAULT_ACTION_LOG_LIMIT,
        }
    }
}
