//! In-memory registry of live sessions.
//!
//! Sessions live only as long as their connection; nothing is persisted.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use eldervale_core::error::DomainError;
use uuid::Uuid;

use crate::domain::aggregates::NarrativeSession;

/// Live sessions keyed by identifier. Sessions never observe one another;
/// the lock only guards the map and is held for a single turn transition.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, NarrativeSession>>,
}

impl SessionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, NarrativeSession>>, DomainError> {
        self.sessions
            .lock()
            .map_err(|_| DomainError::Infrastructure("session registry lock poisoned".into()))
    }

    /// Registers a session and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn insert(&self, session: NarrativeSession) -> Result<Uuid, DomainError> {
        let id = session.id;
        self.lock()?.insert(id, session);
        Ok(id)
    }

    /// Runs `f` against the session with the given id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no such session is live, or
    /// `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn with_session<R>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut NarrativeSession) -> R,
    ) -> Result<R, DomainError> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(DomainError::SessionNotFound(session_id))?;
        Ok(f(session))
    }

    /// Removes and returns a session.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if no such session is live, or
    /// `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn remove(&self, session_id: Uuid) -> Result<NarrativeSession, DomainError> {
        self.lock()?
            .remove(&session_id)
            .ok_or(DomainError::SessionNotFound(session_id))
    }

    /// Number of live sessions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn len(&self) -> Result<usize, DomainError> {
        Ok(self.lock()?.len())
    }

    /// Whether no sessions are live.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the registry lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.lock()?.is_empty())
    }
}
