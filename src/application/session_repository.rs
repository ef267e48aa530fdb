// Repository trait for per-session state storage
use crate::domain::home_state::DashboardState;
use crate::domain::session::SessionId;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to one session's state. Holding the lock serializes
/// interaction cycles for that session.
pub type SessionHandle = Arc<Mutex<DashboardState>>;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Look up a live session and mark it as seen at `now`
    async fn get(&self, id: SessionId, now: DateTime<Local>) -> Option<SessionHandle>;

    /// Look up a session without marking it as seen
    #[cfg(test)]
    async fn peek(&self, id: SessionId) -> Option<SessionHandle>;

    /// Store `state` under `id` unless a session already exists there.
    /// Returns whichever state ends up stored.
    async fn insert(&self, id: SessionId, state: DashboardState, now: DateTime<Local>) -> SessionHandle;

    /// Drop sessions last seen before `cutoff`, returning how many were dropped
    async fn remove_idle(&self, cutoff: DateTime<Local>) -> usize;

    /// Number of live sessions
    async fn len(&self) -> usize;
}
