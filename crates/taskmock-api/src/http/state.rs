//! Application state for HTTP handlers.

use std::sync::Arc;

use taskmock_domain::{IdGenerator, SessionClock};
use taskmock_storage::SessionStore;

/// Application state shared across all HTTP handlers.
///
/// Holds the session store plus the two session-scoped services the
/// handlers compose: the identifier generator (one namespace for tasks and
/// lists) and the clock that stamps `touched`.
///
/// # Type Parameters
///
/// * `S` - The session store backend implementing `SessionStore`
#[derive(Clone)]
pub struct AppState<S: SessionStore> {
    /// The session store backend.
    pub store: Arc<S>,
    /// Identifier source shared by both entity factories.
    pub ids: Arc<IdGenerator>,
    /// Clock for `touched` timestamps.
    pub clock: Arc<SessionClock>,
}

impl<S: SessionStore> AppState<S> {
    /// Creates a new application state around the given store, with a
    /// fresh id generator and clock.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            ids: Arc::new(IdGenerator::new()),
            clock: Arc::new(SessionClock::new()),
        }
    }
}
