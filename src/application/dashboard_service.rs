// Dashboard service - Use cases for one interaction cycle per request
use crate::application::clock::Clock;
use crate::application::session_repository::{SessionHandle, SessionRepository};
use crate::domain::dashboard::Dashboard;
use crate::domain::energy::synthesize_hourly_energy;
use crate::domain::home_state::DashboardState;
use crate::domain::lights::Room;
use crate::domain::session::SessionId;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
    rng: Arc<Mutex<StdRng>>,
    idle_timeout: chrono::Duration,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
        rng: StdRng,
        idle_timeout: chrono::Duration,
    ) -> Self {
        Self {
            repository,
            clock,
            rng: Arc::new(Mutex::new(rng)),
            idle_timeout,
        }
    }

    /// Run the update step for the session and derive the page from the result
    pub async fn render(&self, id: SessionId) -> Dashboard {
        let handle = self.session(id).await;
        let mut state = handle.lock().await;
        let now = self.clock.now();

        let mut rng = self.rng.lock().await;
        let update = state.step(&mut *rng, now.time());
        let hourly = synthesize_hourly_energy(&mut *rng);
        drop(rng);

        tracing::trace!(
            session = %id,
            temperature_delta = update.temperature_delta,
            humidity_delta = update.humidity_delta,
            energy_delta = update.energy_delta,
            "Applied sensor update"
        );

        Dashboard::derive(&state, hourly)
    }

    /// Overwrite the thermostat setpoint, returning the stored value
    pub async fn set_thermostat(&self, id: SessionId, value: i32) -> i32 {
        let handle = self.session(id).await;
        let mut state = handle.lock().await;
        if state.set_thermostat(value) {
            tracing::debug!(session = %id, setpoint = value, "Thermostat changed");
        }
        state.thermostat_setpoint()
    }

    /// Flip one room's light, returning its new state
    pub async fn toggle_light(&self, id: SessionId, room: Room) -> bool {
        let handle = self.session(id).await;
        let on = handle.lock().await.toggle_light(room);
        tracing::debug!(session = %id, %room, on, "Light toggled");
        on
    }

    /// Copy of the current state without running a cycle or refreshing liveness
    #[cfg(test)]
    pub async fn snapshot(&self, id: SessionId) -> Option<DashboardState> {
        let handle = self.repository.peek(id).await?;
        let state = handle.lock().await.clone();
        Some(state)
    }

    /// Resolve a session, discarding idle ones first and creating it if needed
    async fn session(&self, id: SessionId) -> SessionHandle {
        let now = self.clock.now();

        let evicted = self.repository.remove_idle(now - self.idle_timeout).await;
        if evicted > 0 {
            tracing::info!("Discarded {} idle sessions", evicted);
        }

        if let Some(handle) = self.repository.get(id, now).await {
            return handle;
        }

        let fresh = {
            let mut rng = self.rng.lock().await;
            DashboardState::new(&mut *rng, now.time())
        };
        let handle = self.repository.insert(id, fresh, now).await;
        let live_sessions = self.repository.len().await;
        tracing::info!(session = %id, live_sessions, "Session started");
        handle
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::home_state::HUMIDITY_RANGE;
    use crate::infrastructure::memory_session_repository::InMemorySessionRepository;
    use chrono::{DateTime, Local, TimeZone};
    use rand::SeedableRng;

    /// Clock that only moves when told to
    pub(crate) struct ManualClock(std::sync::Mutex<DateTime<Local>>);

    impl ManualClock {
        pub(crate) fn at(hour: u32, min: u32, sec: u32) -> Self {
            let now = Local
                .with_ymd_and_hms(2024, 3, 1, hour, min, sec)
                .earliest()
                .expect("valid local time");
            Self(std::sync::Mutex::new(now))
        }

        pub(crate) fn advance(&self, by: chrono::Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            *self.0.lock().unwrap()
        }
    }

    fn service_with(clock: Arc<ManualClock>) -> DashboardService {
        DashboardService::new(
            Arc::new(InMemorySessionRepository::new()),
            clock,
            StdRng::seed_from_u64(5),
            chrono::Duration::minutes(30),
        )
    }

    fn service() -> DashboardService {
        service_with(Arc::new(ManualClock::at(9, 15, 0)))
    }

    #[tokio::test]
    async fn test_render_creates_session_and_stamps_time() {
        let service = service();
        let id = SessionId::new();
        assert!(service.snapshot(id).await.is_none());

        let dashboard = service.render(id).await;
        assert_eq!(dashboard.last_update, "09:15:00");
        assert_eq!(dashboard.thermostat.setpoint, 22);
        assert!(service.snapshot(id).await.is_some());
    }

    #[tokio::test]
    async fn test_every_render_runs_one_update_step() {
        let service = service();
        let id = SessionId::new();
        for _ in 0..200 {
            let dashboard = service.render(id).await;
            let state = service.snapshot(id).await.unwrap();
            assert_eq!(dashboard.temperature.value, state.temperature());
            assert_eq!(dashboard.daily_energy.value, state.daily_energy_usage());
            assert!(HUMIDITY_RANGE.contains(&state.humidity()));
        }
    }

    #[tokio::test]
    async fn test_set_thermostat_then_render() {
        let service = service();
        let id = SessionId::new();
        service.render(id).await;

        assert_eq!(service.set_thermostat(id, 20).await, 20);
        let dashboard = service.render(id).await;
        assert_eq!(dashboard.thermostat.setpoint, 20);
        assert_eq!(dashboard.thermostat.display, "20°C");
    }

    #[tokio::test]
    async fn test_renders_never_move_thermostat() {
        let service = service();
        let id = SessionId::new();
        service.set_thermostat(id, 26).await;
        for _ in 0..100 {
            assert_eq!(service.render(id).await.thermostat.setpoint, 26);
        }
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_light() {
        let service = service();
        let id = SessionId::new();
        let before = service.render(id).await.lights[1].on;
        assert_eq!(service.toggle_light(id, Room::Kitchen).await, !before);
        assert_eq!(service.toggle_light(id, Room::Kitchen).await, before);
        assert_eq!(service.render(id).await.lights[1].on, before);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let service = service();
        let alice = SessionId::new();
        let bob = SessionId::new();
        service.render(alice).await;
        service.render(bob).await;

        service.set_thermostat(alice, 18).await;
        service.toggle_light(alice, Room::Bedroom).await;
        service.set_thermostat(bob, 28).await;

        let alice_state = service.snapshot(alice).await.unwrap();
        let bob_state = service.snapshot(bob).await.unwrap();
        assert_eq!(alice_state.thermostat_setpoint(), 18);
        assert_eq!(bob_state.thermostat_setpoint(), 28);
        assert!(alice_state.lights().is_on(Room::Bedroom));
        assert!(!bob_state.lights().is_on(Room::Bedroom));
    }

    #[tokio::test]
    async fn test_idle_sessions_are_discarded() {
        let clock = Arc::new(ManualClock::at(8, 0, 0));
        let service = service_with(clock.clone());
        let stale = SessionId::new();
        let active = SessionId::new();

        service.set_thermostat(stale, 19).await;
        clock.advance(chrono::Duration::minutes(20));
        service.set_thermostat(active, 27).await;
        clock.advance(chrono::Duration::minutes(20));

        // the next cycle sweeps sessions idle for more than 30 minutes
        service.render(active).await;
        assert!(service.snapshot(stale).await.is_none());
        assert_eq!(service.snapshot(active).await.unwrap().thermostat_setpoint(), 27);

        // an expired id starts over from the initial state
        assert_eq!(service.render(stale).await.thermostat.setpoint, 22);
    }

    #[tokio::test]
    async fn test_reading_a_snapshot_does_not_keep_a_session_alive() {
        let clock = Arc::new(ManualClock::at(8, 0, 0));
        let service = service_with(clock.clone());
        let watched = SessionId::new();

        service.set_thermostat(watched, 21).await;
        clock.advance(chrono::Duration::minutes(25));
        assert!(service.snapshot(watched).await.is_some());
        clock.advance(chrono::Duration::minutes(25));

        service.render(SessionId::new()).await;
        assert!(service.snapshot(watched).await.is_none());
    }

    #[test]
    fn test_use_case_futures_are_send() {
        fn assert_send<T: Send>(_: T) {}

        let service = service();
        let id = SessionId::new();
        assert_send(service.render(id));
        assert_send(service.set_thermostat(id, 20));
        assert_send(service.toggle_light(id, Room::Living));
        assert_send(service.session(id));
    }
}
