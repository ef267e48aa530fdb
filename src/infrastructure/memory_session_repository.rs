// In-memory session repository - state lives only as long as the process
use crate::application::session_repository::{SessionHandle, SessionRepository};
use crate::domain::home_state::DashboardState;
use crate::domain::session::SessionId;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

struct SessionEntry {
    state: SessionHandle,
    last_seen: DateTime<Local>,
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<SessionId, SessionEntry>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get(&self, id: SessionId, now: DateTime<Local>) -> Option<SessionHandle> {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_seen = now;
        Some(entry.state.clone())
    }

    #[cfg(test)]
    async fn peek(&self, id: SessionId) -> Option<SessionHandle> {
        let sessions = self.sessions.lock().await;
        sessions.get(&id).map(|entry| entry.state.clone())
    }

    async fn insert(&self, id: SessionId, state: DashboardState, now: DateTime<Local>) -> SessionHandle {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions.entry(id).or_insert_with(|| SessionEntry {
            state: Arc::new(Mutex::new(state)),
            last_seen: now,
        });
        entry.last_seen = now;
        entry.state.clone()
    }

    async fn remove_idle(&self, cutoff: DateTime<Local>) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_seen >= cutoff);
        before - sessions.len()
    }

    async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn at(min: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 6, 1, 10, min, 0)
            .earliest()
            .expect("valid local time")
    }

    fn state(seed: u64) -> DashboardState {
        let now = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        DashboardState::new(&mut StdRng::seed_from_u64(seed), now)
    }

    #[tokio::test]
    async fn test_insert_keeps_existing_session() {
        let repo = InMemorySessionRepository::new();
        let id = SessionId::new();

        let first = repo.insert(id, state(1), at(0)).await;
        first.lock().await.set_thermostat(19);

        let second = repo.insert(id, state(2), at(1)).await;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.lock().await.thermostat_setpoint(), 19);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_session() {
        let repo = InMemorySessionRepository::new();
        assert!(repo.get(SessionId::new(), at(0)).await.is_none());
    }

    #[tokio::test]
    async fn test_get_refreshes_last_seen() {
        let repo = InMemorySessionRepository::new();
        let id = SessionId::new();
        repo.insert(id, state(1), at(0)).await;
        assert!(repo.get(id, at(10)).await.is_some());

        assert_eq!(repo.remove_idle(at(5)).await, 0);
        assert_eq!(repo.remove_idle(at(10) + Duration::seconds(1)).await, 1);
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn test_peek_leaves_last_seen_alone() {
        let repo = InMemorySessionRepository::new();
        let id = SessionId::new();
        repo.insert(id, state(1), at(0)).await;
        assert!(repo.peek(id).await.is_some());
        assert!(repo.peek(SessionId::new()).await.is_none());

        assert_eq!(repo.remove_idle(at(1)).await, 1);
        assert!(repo.peek(id).await.is_none());
    }

    #[tokio::test]
    async fn test_remove_idle_only_drops_stale_sessions() {
        let repo = InMemorySessionRepository::new();
        let stale = SessionId::new();
        let fresh = SessionId::new();
        repo.insert(stale, state(1), at(0)).await;
        repo.insert(fresh, state(2), at(20)).await;

        assert_eq!(repo.remove_idle(at(10)).await, 1);
        assert!(repo.get(stale, at(21)).await.is_none());
        assert!(repo.get(fresh, at(21)).await.is_some());
    }
}
