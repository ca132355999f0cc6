//! Speed model and timed boost

use serde::{Deserialize, Serialize};

use crate::consts::SLOPE_DIVISOR;
use crate::settings::SpeedModelSettings;

/// Boost state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Boost {
    #[default]
    Idle,
    Boosting { remaining_ms: i64 },
}

impl Boost {
    pub fn is_active(&self) -> bool {
        matches!(self, Boost::Boosting { .. })
    }

    /// Start a boost lasting `duration_ms`.
    ///
    /// A request while already boosting leaves the countdown untouched.
    /// Returns true if a new boost started.
    pub fn request(&mut self, duration_ms: u32) -> bool {
        match self {
            Boost::Idle => {
                *self = Boost::Boosting {
                    remaining_ms: duration_ms as i64,
                };
                true
            }
            Boost::Boosting { .. } => false,
        }
    }

    /// Count down by one tick step, dropping back to idle once expired
    pub fn advance(&mut self, step_ms: u32) {
        if let Boost::Boosting { remaining_ms } = self {
            *remaining_ms -= step_ms as i64;
            if *remaining_ms <= 0 {
                *self = Boost::Idle;
            }
        }
    }
}

/// Compute next tick's speed.
///
/// Exactly one regime applies: boost, then brake, then coasting deceleration.
/// The slope term is added afterwards and the result clamped.
pub fn next_speed(
    speed: f32,
    boosting: bool,
    braking: bool,
    slope_acceleration: f32,
    model: &SpeedModelSettings,
) -> f32 {
    let mut speed = if boosting {
        speed + model.acceleration
    } else if braking {
        speed - model.brake
    } else {
        speed - model.deceleration
    };
    speed += slope_acceleration / SLOPE_DIVISOR;
    speed.clamp(model.min_speed, model.max_speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_MS;
    use proptest::prelude::*;

    fn model() -> SpeedModelSettings {
        SpeedModelSettings::default()
    }

    #[test]
    fn test_regime_priority() {
        let m = model();
        // Boost wins over brake
        assert!((next_speed(50.0, true, true, 0.0, &m) - 50.3).abs() < 1e-5);
        assert!((next_speed(50.0, false, true, 0.0, &m) - 49.5).abs() < 1e-5);
        assert!((next_speed(50.0, false, false, 0.0, &m) - 49.9).abs() < 1e-5);
    }

    #[test]
    fn test_slope_is_scaled() {
        let m = model();
        assert!((next_speed(50.0, false, false, 5.0, &m) - 49.95).abs() < 1e-5);
        assert!((next_speed(50.0, false, false, -10.0, &m) - 49.8).abs() < 1e-5);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let m = model();
        assert_eq!(next_speed(10.0, false, true, -10.0, &m), 10.0);
        assert_eq!(next_speed(150.0, true, false, 5.0, &m), 150.0);
    }

    #[test]
    fn test_boost_request_sets_full_duration() {
        let mut boost = Boost::Idle;
        assert!(boost.request(15_000));
        assert_eq!(
            boost,
            Boost::Boosting {
                remaining_ms: 15_000
            }
        );
    }

    #[test]
    fn test_boost_expires_after_exact_tick_count() {
        let mut boost = Boost::Idle;
        boost.request(15_000);
        let expected = 15_000u32.div_ceil(TICK_MS);
        assert_eq!(expected, 938);

        for tick in 1..expected {
            boost.advance(TICK_MS);
            assert!(boost.is_active(), "boost ended early at tick {tick}");
        }
        boost.advance(TICK_MS);
        assert_eq!(boost, Boost::Idle);
    }

    #[test]
    fn test_boost_rerequest_does_not_refresh() {
        let mut boost = Boost::Idle;
        boost.request(15_000);
        for _ in 0..100 {
            boost.advance(TICK_MS);
        }
        assert!(!boost.request(15_000));
        assert_eq!(
            boost,
            Boost::Boosting {
                remaining_ms: 15_000 - 100 * TICK_MS as i64
            }
        );
    }

    #[test]
    fn test_idle_advance_is_noop() {
        let mut boost = Boost::Idle;
        boost.advance(TICK_MS);
        assert_eq!(boost, Boost::Idle);
    }

    proptest! {
        #[test]
        fn prop_speed_stays_in_bounds(
            speed in 10.0f32..=150.0,
            boosting in any::<bool>(),
            braking in any::<bool>(),
            slope in -1000.0f32..1000.0,
        ) {
            let m = model();
            let next = next_speed(speed, boosting, braking, slope, &m);
            prop_assert!(next >= m.min_speed && next <= m.max_speed);
        }
    }
}
