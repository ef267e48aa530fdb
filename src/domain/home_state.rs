// Per-session home state: sensor readings, user controls and energy counters
use super::lights::{Lights, Room};
use super::sensors::{SensorUpdate, round_to};
use chrono::NaiveTime;
use rand::Rng;
use std::ops::RangeInclusive;

pub const THERMOSTAT_RANGE: RangeInclusive<i32> = 18..=28;
pub const HUMIDITY_RANGE: RangeInclusive<i32> = 30..=70;

const INITIAL_TEMPERATURE: f64 = 21.5;
const INITIAL_HUMIDITY: i32 = 42;
const INITIAL_THERMOSTAT: i32 = 22;
const INITIAL_DAILY_ENERGY: RangeInclusive<f64> = 8.0..=15.0;
const INITIAL_WEEKLY_ENERGY: RangeInclusive<f64> = 50.0..=90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    temperature: f64,
    humidity: i32,
    thermostat_setpoint: i32,
    lights: Lights,
    daily_energy_usage: f64,
    weekly_energy_total: f64,
    last_update: NaiveTime,
}

impl DashboardState {
    /// Fresh state for a new session. Energy counters start at a random point.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, now: NaiveTime) -> Self {
        Self {
            temperature: INITIAL_TEMPERATURE,
            humidity: INITIAL_HUMIDITY,
            thermostat_setpoint: INITIAL_THERMOSTAT,
            lights: Lights::default(),
            daily_energy_usage: rng.gen_range(INITIAL_DAILY_ENERGY),
            weekly_energy_total: rng.gen_range(INITIAL_WEEKLY_ENERGY),
            last_update: now,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> i32 {
        self.humidity
    }

    pub fn thermostat_setpoint(&self) -> i32 {
        self.thermostat_setpoint
    }

    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    pub fn daily_energy_usage(&self) -> f64 {
        self.daily_energy_usage
    }

    pub fn weekly_energy_total(&self) -> f64 {
        self.weekly_energy_total
    }

    /// Last update as HH:MM:SS, 24-hour
    pub fn last_update_label(&self) -> String {
        self.last_update.format("%H:%M:%S").to_string()
    }

    /// Overwrite the setpoint. Callers keep `value` inside `THERMOSTAT_RANGE`.
    /// Returns whether the stored value changed.
    pub fn set_thermostat(&mut self, value: i32) -> bool {
        debug_assert!(THERMOSTAT_RANGE.contains(&value), "thermostat out of range: {value}");
        let changed = self.thermostat_setpoint != value;
        self.thermostat_setpoint = value;
        changed
    }

    /// Flip one room's light and return its new state
    pub fn toggle_light(&mut self, room: Room) -> bool {
        self.lights.toggle(room)
    }

    /// Apply one cycle of the random walk. Thermostat and lights are untouched.
    pub fn apply_sensor_update(&mut self, update: &SensorUpdate, now: NaiveTime) {
        self.temperature = round_to(self.temperature + update.temperature_delta, 1);

        let humidity = (self.humidity as f64 + update.humidity_delta).round() as i32;
        self.humidity = humidity.clamp(*HUMIDITY_RANGE.start(), *HUMIDITY_RANGE.end());

        self.daily_energy_usage = round_to(self.daily_energy_usage + update.daily_energy_delta(), 2);
        self.weekly_energy_total = round_to(self.weekly_energy_total + update.weekly_energy_delta(), 2);

        self.last_update = now;
    }

    /// Draw a fresh update from `rng` and apply it
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, now: NaiveTime) -> SensorUpdate {
        let update = SensorUpdate::sample(rng);
        self.apply_sensor_update(&update, now);
        update
    }
}
