// Synthetic hourly energy profile used by the usage chart
use rand::Rng;
use serde::Serialize;
use std::ops::{Range, RangeInclusive};

pub const HOURS_PER_DAY: u32 = 24;

/// Time-of-day band with its own usage range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyBand {
    Night,
    MorningPeak,
    Day,
    EveningPeak,
    LateNight,
}

impl EnergyBand {
    pub const ALL: [EnergyBand; 5] = [
        EnergyBand::Night,
        EnergyBand::MorningPeak,
        EnergyBand::Day,
        EnergyBand::EveningPeak,
        EnergyBand::LateNight,
    ];

    pub fn hours(&self) -> Range<u32> {
        match self {
            EnergyBand::Night => 0..6,
            EnergyBand::MorningPeak => 6..9,
            EnergyBand::Day => 9..17,
            EnergyBand::EveningPeak => 17..22,
            EnergyBand::LateNight => 22..24,
        }
    }

    /// kWh range sampled for every hour in the band
    pub fn usage(&self) -> RangeInclusive<f64> {
        match self {
            EnergyBand::Night => 0.2..=0.5,
            EnergyBand::MorningPeak => 1.5..=2.3,
            EnergyBand::Day => 0.8..=1.3,
            EnergyBand::EveningPeak => 1.7..=2.5,
            EnergyBand::LateNight => 0.3..=0.7,
        }
    }

    pub fn for_hour(hour: u32) -> EnergyBand {
        let hour = hour % HOURS_PER_DAY;
        EnergyBand::ALL
            .into_iter()
            .find(|band| band.hours().contains(&hour))
            .unwrap_or(EnergyBand::LateNight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyEnergy {
    pub hour: u32,
    pub kwh: f64,
}

impl HourlyEnergy {
    /// Axis label such as "7:00"
    pub fn label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

/// Fresh 24-point profile. Regenerated every cycle and never stored.
pub fn synthesize_hourly_energy<R: Rng + ?Sized>(rng: &mut R) -> Vec<HourlyEnergy> {
    (0..HOURS_PER_DAY)
        .map(|hour| HourlyEnergy {
            hour,
            kwh: rng.gen_range(EnergyBand::for_hour(hour).usage()),
        })
        .collect()
}
