//! HUD readout
//!
//! Plain values for the host UI; formatting is left to the host.

use serde::Serialize;

use crate::consts::MS_TO_KMH;
use crate::settings::SpeedometerSettings;
use crate::sim::{GameState, current_location};

/// What the on-screen readout shows this frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub elapsed_seconds: u64,
    pub display_speed_kmh: u32,
    /// Arcade distance: one "km" per 100 ms of driving
    pub display_distance_km: u64,
    pub location_name: &'static str,
    pub boosting: bool,
    pub running: bool,
    pub score: u64,
}

impl HudSnapshot {
    pub fn new(state: &GameState, boosting: bool, speedometer: &SpeedometerSettings) -> Self {
        Self {
            elapsed_seconds: state.game_time_ms / 1000,
            display_speed_kmh: display_speed_kmh(state.speed, speedometer),
            display_distance_km: state.game_time_ms / 100,
            location_name: current_location(state),
            boosting,
            running: state.running,
            score: state.score,
        }
    }
}

/// Scale the real speed onto the speedometer range, capped at its maximum
pub fn display_speed_kmh(speed: f32, speedometer: &SpeedometerSettings) -> u32 {
    let kmh = speed as f64 * MS_TO_KMH;
    let scaled = (kmh * speedometer.display_max_speed as f64 / speedometer.max_speed as f64).floor();
    scaled.min(speedometer.display_max_speed as f64).max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EnvironmentKind;

    #[test]
    fn test_display_speed_scaling() {
        let meter = SpeedometerSettings::default();
        // 300 / 540 scaling turns m/s into exactly twice the value
        assert_eq!(display_speed_kmh(50.3, &meter), 100);
        assert_eq!(display_speed_kmh(10.2, &meter), 20);
        assert_eq!(display_speed_kmh(0.0, &meter), 0);
    }

    #[test]
    fn test_display_speed_is_capped() {
        let meter = SpeedometerSettings {
            display_max_speed: 300.0,
            max_speed: 270.0,
        };
        assert_eq!(display_speed_kmh(149.0, &meter), 300);
    }

    #[test]
    fn test_snapshot_fields() {
        let mut state = GameState::new(75.2);
        state.game_time_ms = 12_345;
        state.environment = EnvironmentKind::Forest;
        state.location_index = 2;
        state.score = 42;

        let hud = HudSnapshot::new(&state, true, &SpeedometerSettings::default());
        assert_eq!(hud.elapsed_seconds, 12);
        assert_eq!(hud.display_distance_km, 123);
        assert_eq!(hud.display_speed_kmh, 150);
        assert_eq!(hud.location_name, "Tama River");
        assert!(hud.boosting);
        assert!(hud.running);
        assert_eq!(hud.score, 42);
    }
}
