use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/home_monitor";
const ENV_PREFIX: &str = "HOME_MONITOR";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub session: SessionSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SimulationSettings {
    /// Fixed seed for reproducible demos; entropy when unset
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

impl SessionSettings {
    pub fn idle_timeout(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.idle_timeout_secs.min(u32::MAX as u64) as i64)
    }
}

impl SimulationSettings {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("session.cookie_name", "home_monitor_session")?
        .set_default("session.idle_timeout_secs", 1800_i64)?
        .set_default("logging.level", "info")?)
}

/// `HOME_MONITOR__SECTION__KEY` variables, e.g. `HOME_MONITOR__SIMULATION__SEED=7`
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}
