//! Game configuration
//!
//! Parsed from the JSON settings document before the first tick. Every section is
//! optional; missing fields fall back to the reference tuning.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a settings document is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("road.curve_change_probability must be within [0, 1], got {0}")]
    CurveProbability(f64),
    #[error("road.curve_max_angle must be non-negative, got {0}")]
    CurveMaxAngle(f32),
    #[error("display.location_change_distance must be positive, got {0}")]
    LocationChangeDistance(f64),
    #[error("game.display_max_speed and game.max_speed must be positive")]
    DisplaySpeed,
    #[error("environmentChangeInterval must be at least one tick")]
    EnvironmentInterval,
    #[error("boostDurationMs must be positive")]
    BoostDuration,
    #[error("speedModel bounds invalid: min {min}, initial {initial}, max {max}")]
    SpeedBounds { min: f32, initial: f32, max: f32 },
    #[error("speedModel.{0} must be non-negative")]
    NegativeRate(&'static str),
    #[error("carHalfWidth ({car}) must be positive and smaller than roadHalfWidth ({road})")]
    Widths { car: f32, road: f32 },
    #[error("vehicle.steerStep must be non-negative, got {0}")]
    SteerStep(f32),
    #[error("vehicle.damping must be within (0, 1], got {0}")]
    Damping(f32),
    #[error("slopeSettings must not be empty")]
    EmptySlope,
    #[error("slopeSettings times must be strictly increasing (entry {0})")]
    SlopeOrder(usize),
}

/// Road curvature behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadSettings {
    /// Per-tick chance of picking a new curve target
    pub curve_change_probability: f64,
    /// Full width of the curve target range, centered on zero
    pub curve_max_angle: f32,
}

impl Default for RoadSettings {
    fn default() -> Self {
        Self {
            curve_change_probability: 0.01,
            curve_max_angle: 1.0,
        }
    }
}

/// Location name display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Kilometers travelled between location name changes
    pub location_change_distance: f64,
    /// How long a location banner stays up (ms)
    pub location_display_time: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            location_change_distance: 0.5,
            location_display_time: 3000,
        }
    }
}

/// Speedometer scaling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedometerSettings {
    /// Highest value the speedometer shows (km/h)
    pub display_max_speed: f32,
    /// Real top speed mapped onto `display_max_speed` (km/h)
    pub max_speed: f32,
}

impl Default for SpeedometerSettings {
    fn default() -> Self {
        Self {
            display_max_speed: 300.0,
            max_speed: 540.0,
        }
    }
}

/// Speed model constants (per tick, in m/s)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpeedModelSettings {
    pub acceleration: f32,
    pub brake: f32,
    pub deceleration: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub initial_speed: f32,
}

impl Default for SpeedModelSettings {
    fn default() -> Self {
        Self {
            acceleration: 0.3,
            brake: 0.5,
            deceleration: 0.1,
            min_speed: 10.0,
            // 540 km/h
            max_speed: 150.0,
            initial_speed: 50.0,
        }
    }
}

/// Steering feel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleSettings {
    /// Lateral shift per tick while a steering input is held
    pub steer_step: f32,
    /// Per-tick multiplier pulling the steering offset back to zero
    pub damping: f32,
    /// Whether road drift carries the vehicle
    pub follows_road: bool,
}

impl Default for VehicleSettings {
    fn default() -> Self {
        Self {
            steer_step: 0.5,
            damping: 0.95,
            follows_road: true,
        }
    }
}

/// One step of the scripted slope profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlopeEntry {
    /// Applies while elapsed whole seconds <= this
    pub time_seconds: u32,
    pub acceleration: f32,
}

/// Complete game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(rename = "road")]
    pub road: RoadSettings,
    #[serde(rename = "display")]
    pub display: DisplaySettings,
    #[serde(rename = "game")]
    pub speedometer: SpeedometerSettings,
    /// Ticks spent in one environment
    pub environment_change_interval: u32,
    pub boost_duration_ms: u32,
    /// Minimum game time between two boost sound cues
    pub boost_cue_cooldown_ms: u32,
    pub road_half_width: f32,
    pub car_half_width: f32,
    pub speed_model: SpeedModelSettings,
    pub vehicle: VehicleSettings,
    pub slope_settings: Vec<SlopeEntry>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            road: RoadSettings::default(),
            display: DisplaySettings::default(),
            speedometer: SpeedometerSettings::default(),
            environment_change_interval: 1000,
            boost_duration_ms: 15_000,
            boost_cue_cooldown_ms: 3000,
            road_half_width: 15.0,
            car_half_width: 1.5,
            speed_model: SpeedModelSettings::default(),
            vehicle: VehicleSettings::default(),
            slope_settings: vec![
                SlopeEntry {
                    time_seconds: 10,
                    acceleration: 5.0,
                },
                SlopeEntry {
                    time_seconds: 20,
                    acceleration: 5.0,
                },
                SlopeEntry {
                    time_seconds: 30,
                    acceleration: 0.0,
                },
                SlopeEntry {
                    time_seconds: 40,
                    acceleration: -10.0,
                },
            ],
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded settings ({} slope steps, environment every {} ticks)",
            config.slope_settings.len(),
            config.environment_change_interval
        );
        Ok(config)
    }

    /// Check every cross-field rule the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = self.road.curve_change_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::CurveProbability(p));
        }
        if !(self.road.curve_max_angle >= 0.0) {
            return Err(ConfigError::CurveMaxAngle(self.road.curve_max_angle));
        }
        if !(self.display.location_change_distance > 0.0) {
            return Err(ConfigError::LocationChangeDistance(
                self.display.location_change_distance,
            ));
        }
        if !(self.speedometer.display_max_speed > 0.0 && self.speedometer.max_speed > 0.0) {
            return Err(ConfigError::DisplaySpeed);
        }
        if self.environment_change_interval == 0 {
            return Err(ConfigError::EnvironmentInterval);
        }
        if self.boost_duration_ms == 0 {
            return Err(ConfigError::BoostDuration);
        }

        let sm = &self.speed_model;
        if !(sm.min_speed <= sm.initial_speed && sm.initial_speed <= sm.max_speed) {
            return Err(ConfigError::SpeedBounds {
                min: sm.min_speed,
                initial: sm.initial_speed,
                max: sm.max_speed,
            });
        }
        for (name, value) in [
            ("acceleration", sm.acceleration),
            ("brake", sm.brake),
            ("deceleration", sm.deceleration),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeRate(name));
            }
        }

        if !(self.car_half_width > 0.0 && self.car_half_width < self.road_half_width) {
            return Err(ConfigError::Widths {
                car: self.car_half_width,
                road: self.road_half_width,
            });
        }
        if !(self.vehicle.steer_step >= 0.0) {
            return Err(ConfigError::SteerStep(self.vehicle.steer_step));
        }
        let damping = self.vehicle.damping;
        if !(damping > 0.0 && damping <= 1.0) {
            return Err(ConfigError::Damping(damping));
        }

        if self.slope_settings.is_empty() {
            return Err(ConfigError::EmptySlope);
        }
        if let Some(i) = self
            .slope_settings
            .windows(2)
            .position(|w| w[1].time_seconds <= w[0].time_seconds)
        {
            return Err(ConfigError::SlopeOrder(i + 1));
        }

        Ok(())
    }

    /// Highest lateral position the car center can reach without leaving the road
    pub fn lateral_limit(&self) -> f32 {
        self.road_half_width - self.car_half_width
    }
}
