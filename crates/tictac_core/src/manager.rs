//! Registry of concurrent game sessions.
//!
//! Each session sits behind its own lock, so two callers driving different
//! games never wait on each other. The registry lock is held only long
//! enough to look a session up.

use crate::session::{GameMode, GameSession};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Error from the session registry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// A session with this id is already registered.
    #[display("Session {:?} already exists", _0)]
    AlreadyExists(SessionId),

    /// No session with this id is registered.
    #[display("Session {:?} not found", _0)]
    NotFound(SessionId),

    /// A thread panicked while holding a lock.
    #[display("Session lock poisoned: {}", _0)]
    Poisoned(String),
}

impl std::error::Error for SessionError {}

impl<T> From<PoisonError<T>> for SessionError {
    fn from(err: PoisonError<T>) -> Self {
        SessionError::Poisoned(err.to_string())
    }
}

type SharedSession = Arc<Mutex<GameSession>>;

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, SharedSession>>>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn registry(&self) -> Result<MutexGuard<'_, HashMap<SessionId, SharedSession>>, SessionError> {
        Ok(self.sessions.lock()?)
    }

    /// Registers a new session under `id`.
    #[instrument(skip(self, session), fields(mode = %session.mode()))]
    pub fn insert(
        &self,
        id: impl Into<SessionId> + std::fmt::Debug,
        session: GameSession,
    ) -> Result<(), SessionError> {
        let id = id.into();
        let mut sessions = self.registry()?;
        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }
        sessions.insert(id.clone(), Arc::new(Mutex::new(session)));
        info!(session_id = %id, "Created new session");
        Ok(())
    }

    /// Creates and registers a fresh session for `mode`.
    pub fn create(
        &self,
        id: impl Into<SessionId> + std::fmt::Debug,
        mode: GameMode,
    ) -> Result<(), SessionError> {
        self.insert(id, GameSession::new(mode))
    }

    /// Runs `f` with exclusive access to one session.
    ///
    /// Only that session is locked while `f` runs.
    #[instrument(skip(self, f))]
    pub fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> T,
    ) -> Result<T, SessionError> {
        let session = self
            .registry()?
            .get(id)
            .cloned()
            .ok_or_else(|| {
                debug!(session_id = id, "Session not found");
                SessionError::NotFound(id.to_string())
            })?;
        let mut guard = session.lock()?;
        Ok(f(&mut guard))
    }

    /// Removes a session, returning its final state.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<GameSession, SessionError> {
        let session = self
            .registry()?
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        info!(session_id = id, "Removed session");
        let state = session.lock()?.clone();
        Ok(state)
    }

    /// Lists all registered session ids, sorted.
    #[instrument(skip(self))]
    pub fn ids(&self) -> Result<Vec<SessionId>, SessionError> {
        let mut ids: Vec<_> = self.registry()?.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}
