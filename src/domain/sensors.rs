// Simulated sensor readings - bounded random walk increments
use rand::Rng;

/// Largest temperature move per cycle, in °C
pub const TEMPERATURE_STEP: f64 = 0.25;
/// Largest humidity move per cycle before rounding, in percentage points
pub const HUMIDITY_STEP: f64 = 0.75;
/// Largest daily energy move per cycle, in kWh
pub const ENERGY_STEP: f64 = 0.15;
/// The weekly total moves by this multiple of the daily move
pub const WEEKLY_ENERGY_FACTOR: f64 = 7.0;

/// One cycle's worth of random increments, drawn before anything is applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorUpdate {
    pub temperature_delta: f64,
    pub humidity_delta: f64,
    pub energy_delta: f64,
}

impl SensorUpdate {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            temperature_delta: rng.gen_range(-TEMPERATURE_STEP..=TEMPERATURE_STEP),
            humidity_delta: rng.gen_range(-HUMIDITY_STEP..=HUMIDITY_STEP),
            energy_delta: rng.gen_range(-ENERGY_STEP..=ENERGY_STEP),
        }
    }

    pub fn daily_energy_delta(&self) -> f64 {
        self.energy_delta
    }

    pub fn weekly_energy_delta(&self) -> f64 {
        self.energy_delta * WEEKLY_ENERGY_FACTOR
    }
}

/// Round half away from zero to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_samples_stay_inside_intervals() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let update = SensorUpdate::sample(&mut rng);
            assert!(update.temperature_delta.abs() <= TEMPERATURE_STEP);
            assert!(update.humidity_delta.abs() <= HUMIDITY_STEP);
            assert!(update.energy_delta.abs() <= ENERGY_STEP);
        }
    }

    #[test]
    fn test_lowest_draw_hits_lower_bounds() {
        let mut rng = StepRng::new(0, 0);
        let update = SensorUpdate::sample(&mut rng);
        assert_eq!(update.temperature_delta, -TEMPERATURE_STEP);
        assert_eq!(update.humidity_delta, -HUMIDITY_STEP);
        assert_eq!(update.energy_delta, -ENERGY_STEP);
    }

    #[test]
    fn test_weekly_delta_is_seven_times_daily() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let update = SensorUpdate::sample(&mut rng);
            assert_eq!(update.weekly_energy_delta(), update.daily_energy_delta() * 7.0);
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(21.74, 1), 21.7);
        assert_eq!(round_to(12.345_678, 2), 12.35);
        assert_eq!(round_to(-0.126, 2), -0.13);
        assert_eq!(round_to(42.5, 0), 43.0);
    }
}
