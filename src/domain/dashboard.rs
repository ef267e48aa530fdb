// Dashboard view model - derived from session state on every render pass
use super::energy::HourlyEnergy;
use super::home_state::{DashboardState, THERMOSTAT_RANGE};
use super::lights::Room;
use serde::Serialize;

pub const DASHBOARD_TITLE: &str = "Minimalist Home Monitor";

/// Readings strictly above this are shown in the alert colour
pub const TEMPERATURE_ALERT_ABOVE: f64 = 25.0;

const TEMPERATURE_GAUGE_MIN: f64 = 15.0;
const TEMPERATURE_GAUGE_SPAN: f64 = 20.0;

pub const ENERGY_SAVING_TIPS: [&str; 3] = [
    "Turn off lights when leaving a room",
    "Lower thermostat by 1°C to save up to 10% on heating",
    "Unplug devices not in use to eliminate standby power",
];

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub last_update: String,
    pub temperature: Reading,
    pub humidity: Reading,
    pub thermostat: ThermostatControl,
    pub daily_energy: Metric,
    pub weekly_energy: Metric,
    pub chart: EnergyChart,
    pub lights: Vec<LightStatus>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub label: String,
    pub value: f64,
    pub display: String,
    /// Fill level of the progress gauge, in [0, 1]
    pub gauge: f64,
    pub alert: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThermostatControl {
    pub setpoint: i32,
    pub display: String,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnergyChart {
    pub series_name: String,
    pub points: Vec<HourlyEnergy>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LightStatus {
    pub room: Room,
    pub label: String,
    pub on: bool,
}

impl LightStatus {
    pub fn status_text(&self) -> &'static str {
        if self.on { "On" } else { "Off" }
    }
}

impl Dashboard {
    pub fn derive(state: &DashboardState, hourly: Vec<HourlyEnergy>) -> Self {
        let temperature = state.temperature();
        let humidity = state.humidity();
        let setpoint = state.thermostat_setpoint();

        Self {
            title: DASHBOARD_TITLE.to_string(),
            last_update: state.last_update_label(),
            temperature: Reading {
                label: "Temperature".to_string(),
                value: temperature,
                display: format!("{:.1}°C", temperature),
                gauge: ((temperature - TEMPERATURE_GAUGE_MIN) / TEMPERATURE_GAUGE_SPAN)
                    .clamp(0.0, 1.0),
                alert: temperature > TEMPERATURE_ALERT_ABOVE,
            },
            humidity: Reading {
                label: "Humidity".to_string(),
                value: humidity as f64,
                display: format!("{}%", humidity),
                gauge: (humidity as f64 / 100.0).clamp(0.0, 1.0),
                alert: false,
            },
            thermostat: ThermostatControl {
                setpoint,
                display: format!("{}°C", setpoint),
                min: *THERMOSTAT_RANGE.start(),
                max: *THERMOSTAT_RANGE.end(),
            },
            daily_energy: Metric {
                label: "Today's Usage".to_string(),
                value: state.daily_energy_usage(),
                display: format!("{:.1} kWh", state.daily_energy_usage()),
            },
            weekly_energy: Metric {
                label: "This Week".to_string(),
                value: state.weekly_energy_total(),
                display: format!("{:.1} kWh", state.weekly_energy_total()),
            },
            chart: EnergyChart {
                series_name: "Energy (kWh)".to_string(),
                points: hourly,
            },
            lights: state
                .lights()
                .iter()
                .map(|(room, on)| LightStatus {
                    room,
                    label: room.label().to_string(),
                    on,
                })
                .collect(),
            tips: ENERGY_SAVING_TIPS.iter().map(|tip| tip.to_string()).collect(),
        }
    }
}
