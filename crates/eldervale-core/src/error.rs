//! Domain error types.
//!
//! The turn transition itself never fails; these errors belong to the
//! surfaces around it (session lookup, configuration, voice output).

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No live session exists for the identifier.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A collaborator (transport, synthesis) failed.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
